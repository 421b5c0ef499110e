//! Independent solution verifier.
//!
//! Checks a returned transform from first principles, without reusing the
//! elimination search: the transform maps an address `x` to the three bits
//! `parity(row_n, x)`, and a pattern survives if its three components map to
//! linearly independent 3-bit images. This is the same condition the
//! elimination search preserves, seen from the complement side.
//!
//! Pattern components are expected to fit inside `bits`; bits above the width
//! are invisible to the transform.

use thiserror::Error;

use crate::common::{PATTERN_RANK, bit_mask, parity};
use crate::pattern::AccessPattern;

use super::Solution;
use super::cost::diagonal_cost;

/// Reasons a solution fails verification.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Violation {
    /// A transform row uses bits beyond the address width.
    #[error("transform row {row} ({value:#x}) exceeds the address width")]
    RowOutOfRange {
        /// Row index.
        row: usize,
        /// Row value.
        value: u32,
    },

    /// The transform rows are not linearly independent.
    #[error("transform rows are linearly dependent")]
    SingularTransform,

    /// The stored cost does not match the cost function.
    #[error("stored cost {stored} differs from computed cost {computed}")]
    CostMismatch {
        /// Cost carried by the solution.
        stored: u32,
        /// Cost recomputed from the rows.
        computed: u32,
    },

    /// A pattern loses rank under the transform.
    #[error("pattern {index} {pattern} collapses under the transform")]
    PatternCollapsed {
        /// Position of the pattern in the input list.
        index: usize,
        /// The offending pattern.
        pattern: AccessPattern,
    },
}

/// Projects an address mask through the transform into a 3-bit image.
pub fn project(rows: &[u32; 3], address: u32) -> u32 {
    rows.iter()
        .zip(0u32..)
        .fold(0, |image, (&row, n)| image | (parity(row, address) << n))
}

/// Verifies `solution` against every pattern of the original query.
///
/// # Arguments
///
/// * `bits` - Address width of the query.
/// * `patterns` - The patterns exactly as submitted.
/// * `solution` - The solution to check.
///
/// # Errors
///
/// Returns the first [`Violation`] found.
pub fn verify_solution(
    bits: u32,
    patterns: &[AccessPattern],
    solution: &Solution,
) -> Result<(), Violation> {
    let mask = bit_mask(bits);
    if let Some((row, &value)) = solution
        .rows
        .iter()
        .enumerate()
        .find(|&(_, &value)| value & !mask != 0)
    {
        return Err(Violation::RowOutOfRange { row, value });
    }

    // Narrower widths cannot host three independent rows.
    if bits >= PATTERN_RANK && !AccessPattern(solution.rows).is_rank_three() {
        return Err(Violation::SingularTransform);
    }

    let computed = diagonal_cost(bits, &solution.rows);
    if computed != solution.cost {
        return Err(Violation::CostMismatch {
            stored: solution.cost,
            computed,
        });
    }

    for (index, pattern) in patterns.iter().enumerate() {
        let image = pattern
            .components()
            .map(|component| project(&solution.rows, component));
        if !AccessPattern(image).is_rank_three() {
            return Err(Violation::PatternCollapsed {
                index,
                pattern: *pattern,
            });
        }
    }

    Ok(())
}
