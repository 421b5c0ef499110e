//! Configuration system for the swizzle solver.
//!
//! This module defines the configuration structures used to parameterize the
//! solver and its memoization cache. It provides:
//! 1. **Defaults:** Baseline values for the bit-width bound and cache sizing.
//! 2. **Structures:** `SolverConfig` and `CacheConfig` under a root `Config`.
//! 3. **Loading:** JSON deserialization with validation.
//!
//! Configuration is supplied as JSON by the embedding tool, or use
//! `Config::default()`.

use serde::Deserialize;

use crate::common::{MASK_WIDTH, Result, SwizzleError};

/// Default configuration constants.
mod defaults {
    /// Largest accepted address width (the full mask width).
    pub const MAX_BITS: u32 = crate::common::MASK_WIDTH;

    /// Solve tracing is off by default.
    pub const TRACE_SOLVES: bool = false;

    /// Memoization is on by default.
    pub const CACHE_ENABLED: bool = true;

    /// Initial number of cache slots.
    ///
    /// The practical input domain is small, so the map rarely grows past this.
    pub const CACHE_INITIAL_CAPACITY: usize = 64;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Solver settings.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Memoization cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing sections and fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SwizzleError::ConfigParse`] for malformed JSON and
    /// [`SwizzleError::InvalidConfig`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`SwizzleError::InvalidConfig`] describing the first problem.
    pub fn validate(&self) -> Result<()> {
        self.solver.validate()
    }
}

/// Solver settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    /// Largest address width accepted by queries (at most the 32-bit mask width)
    #[serde(default = "SolverConfig::default_max_bits")]
    pub max_bits: u32,

    /// Log every solve at info level
    #[serde(default)]
    pub trace_solves: bool,
}

impl SolverConfig {
    fn default_max_bits() -> u32 {
        defaults::MAX_BITS
    }

    /// Rejects a `max_bits` wider than the mask type.
    ///
    /// # Errors
    ///
    /// Returns [`SwizzleError::InvalidConfig`] when `max_bits > 32`.
    pub fn validate(&self) -> Result<()> {
        if self.max_bits > MASK_WIDTH {
            return Err(SwizzleError::InvalidConfig(format!(
                "solver.max_bits = {} exceeds the {MASK_WIDTH}-bit mask width",
                self.max_bits
            )));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_bits: defaults::MAX_BITS,
            trace_solves: defaults::TRACE_SOLVES,
        }
    }
}

/// Memoization cache settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// When false, every query is solved afresh and nothing is stored
    #[serde(default = "CacheConfig::default_enabled")]
    pub enabled: bool,

    /// Number of entries to reserve up front
    #[serde(default = "CacheConfig::default_initial_capacity")]
    pub initial_capacity: usize,
}

impl CacheConfig {
    fn default_enabled() -> bool {
        defaults::CACHE_ENABLED
    }

    fn default_initial_capacity() -> usize {
        defaults::CACHE_INITIAL_CAPACITY
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::CACHE_ENABLED,
            initial_capacity: defaults::CACHE_INITIAL_CAPACITY,
        }
    }
}
