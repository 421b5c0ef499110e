//! Complement basis construction.
//!
//! Turns a reduced elimination basis into the basic rows of the swizzle
//! transform. Each free bit yields one row; the row also carries every primary
//! bit whose kernel vector depends on that free bit, which makes the row
//! orthogonal to the whole kernel space.

use crate::common::{is_set, lowest_bit};

use super::elimination::EliminationBasis;

/// Builds one basic row per free bit, in ascending bit order.
///
/// # Arguments
///
/// * `bits` - Address width of the query.
/// * `basis` - The elimination basis, already row-reduced.
///
/// # Returns
///
/// The basic rows. There are exactly three when `bits >= 3`, fewer for
/// narrower widths.
pub fn basic_rows(bits: u32, basis: &EliminationBasis) -> Vec<u32> {
    let mut free = basis.free_bits(bits);
    let mut rows = Vec::with_capacity(free.count_ones() as usize);

    while free != 0 {
        let low = lowest_bit(free);
        free ^= low;

        let row = basis
            .pairs()
            .iter()
            .filter(|elimination| elimination.vector & low != 0)
            .fold(low, |row, elimination| row | elimination.primary_mask());
        rows.push(row);
    }

    rows
}

/// GF(2) row combination: XOR of the rows selected by the bits of `selector`.
///
/// Bit `n` of `selector` selects `rows[n]`; selector bits without a matching
/// row contribute nothing.
#[inline]
pub fn gemv(rows: &[u32], selector: u8) -> u32 {
    rows.iter()
        .zip(0u32..)
        .filter(|&(_, index)| is_set(u32::from(selector), index))
        .fold(0, |acc, (row, _)| acc ^ row)
}
