//! Solver error definitions.
//!
//! "No solution" is an ordinary result (`Ok(None)`) and never appears here.
//! This module only covers the out-of-band failures:
//! 1. **Precondition violations:** Bit widths the 32-bit masks cannot hold.
//! 2. **Configuration errors:** Malformed or semantically invalid config.

use thiserror::Error;

/// Errors raised by the swizzle solver and its cache.
#[derive(Debug, Error)]
pub enum SwizzleError {
    /// The requested bit width exceeds what the solver accepts.
    #[error("bit width {bits} is out of range (maximum {max})")]
    BitWidthOutOfRange {
        /// Requested width.
        bits: u32,
        /// Largest accepted width.
        max: u32,
    },

    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Convenience alias used by every fallible solver API.
pub type Result<T> = std::result::Result<T, SwizzleError>;
