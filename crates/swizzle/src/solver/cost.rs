//! Diagonal cost of a swizzle transform.
//!
//! Counts the diagonal positions of the transform that have any bit set. The
//! formula is kept bit-for-bit; consumers of the transform rely on exact parity
//! with it rather than on what it approximates.

use crate::common::{MASK_WIDTH, is_set};

/// Scores a transform; lower is better and the minimum is 1.
///
/// The score starts at 1, adds 1 if bit 0 of `transform[2]` is set, adds 1 if
/// bit 0 of `transform[1]` or bit 1 of `transform[2]` is set, then for every
/// `i` in `1..bits` adds 1 if bit `i` of `transform[0]`, bit `i + 1` of
/// `transform[1]` or bit `i + 2` of `transform[2]` is set. Bits beyond the
/// mask width count as clear.
///
/// # Arguments
///
/// * `bits` - Address width of the transform.
/// * `transform` - The three transform rows.
///
/// # Returns
///
/// The diagonal cost.
pub fn diagonal_cost(bits: u32, transform: &[u32; 3]) -> u32 {
    let [t0, t1, t2] = *transform;

    let mut cost = 1;
    cost += u32::from(is_set(t2, 0));
    cost += u32::from(is_set(t1, 0) || is_set(t2, 1));

    // Every term for i >= MASK_WIDTH reads bits past the mask and is zero.
    for i in 1..bits.min(MASK_WIDTH) {
        cost += u32::from(is_set(t0, i) || is_set(t1, i + 1) || is_set(t2, i + 2));
    }

    cost
}
