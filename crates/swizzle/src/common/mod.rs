//! Common utilities and types used throughout the swizzle solver.
//!
//! This module provides the building blocks shared by every other module:
//! 1. **Constants:** Mask width, pattern rank, and GL(3,2) sizes.
//! 2. **Bit Helpers:** Masks, bit tests, and GF(2) parity.
//! 3. **Error Handling:** The `SwizzleError` type and `Result` alias.

/// Bit-mask helpers.
pub mod bits;

/// Solver-wide constants.
pub mod constants;

/// Error types.
pub mod error;

pub use bits::{bit_mask, ensure_bit_width, is_set, lowest_bit, parity, single_bit};
pub use constants::{GL3_ORDER, MASK_WIDTH, MAX_SELECTOR, PATTERN_RANK};
pub use error::{Result, SwizzleError};
