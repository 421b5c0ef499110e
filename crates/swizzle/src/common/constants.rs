//! Global Solver Constants.
//!
//! This module defines constants shared across the solver. It includes:
//! 1. **Mask Constants:** The width of every address-bit mask.
//! 2. **Rank Constants:** The rank every access pattern has to keep.
//! 3. **Search Constants:** Sizes of the GL(3,2) coefficient enumeration.

/// Width in bits of an address mask (`u32`).
///
/// Bit widths above this value cannot be represented and are rejected as a
/// precondition violation instead of being truncated.
pub const MASK_WIDTH: u32 = u32::BITS;

/// Rank an access pattern (and the swizzle transform) must have over GF(2).
///
/// This is also the number of free bit positions left once the elimination
/// search has claimed `bits - PATTERN_RANK` primary dimensions.
pub const PATTERN_RANK: u32 = 3;

/// Order of GL(3,2), the group of invertible 3×3 binary matrices.
pub const GL3_ORDER: usize = 168;

/// Largest 3-bit coefficient selector (selects all three basic rows).
pub const MAX_SELECTOR: u8 = 0b111;
