//! Bit-mask helpers.
//!
//! Small const helpers for working with address masks as GF(2) vectors. Every
//! shift goes through `checked_shr`/`checked_shl` so that indices beyond the
//! mask width read as zero instead of overflowing.

use super::constants::MASK_WIDTH;
use super::error::{Result, SwizzleError};

/// Returns a mask with the low `bits` bits set.
///
/// Widths of `MASK_WIDTH` or more yield a full mask.
#[inline]
pub const fn bit_mask(bits: u32) -> u32 {
    if bits >= MASK_WIDTH {
        u32::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Returns a mask with only bit `index` set, or zero when `index` is out of range.
#[inline]
pub const fn single_bit(index: u32) -> u32 {
    match 1u32.checked_shl(index) {
        Some(bit) => bit,
        None => 0,
    }
}

/// Tests bit `index` of `value`. Bits beyond the mask width read as clear.
#[inline]
pub const fn is_set(value: u32, index: u32) -> bool {
    match value.checked_shr(index) {
        Some(shifted) => shifted & 1 == 1,
        None => false,
    }
}

/// Isolates the lowest set bit of `value` (zero stays zero).
#[inline]
pub const fn lowest_bit(value: u32) -> u32 {
    value & value.wrapping_neg()
}

/// GF(2) inner product: parity of the bits shared by `a` and `b`.
#[inline]
pub const fn parity(a: u32, b: u32) -> u32 {
    (a & b).count_ones() & 1
}

/// Rejects bit widths the solver cannot represent.
///
/// # Arguments
///
/// * `bits` - The requested address width.
/// * `max` - The largest width accepted. Values above [`MASK_WIDTH`] are
///   clamped to it.
///
/// # Errors
///
/// Returns [`SwizzleError::BitWidthOutOfRange`] when `bits` exceeds the
/// clamped maximum.
pub fn ensure_bit_width(bits: u32, max: u32) -> Result<()> {
    let max = max.min(MASK_WIDTH);
    if bits > max {
        return Err(SwizzleError::BitWidthOutOfRange { bits, max });
    }
    Ok(())
}
