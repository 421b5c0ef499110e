//! Exhaustive search over GL(3,2).
//!
//! Any invertible recombination of the three basic rows is an equally valid
//! transform, so the solver scores all 168 of them and keeps the cheapest.
//! The recombinations are precomputed as a table of coefficient triples; row
//! `n` of a candidate is the XOR of the basic rows selected by the bits of
//! coefficient `n`.
//!
//! Table order: for every `1 <= i < j < k <= 7` with `i ^ j != k`, the six
//! permutations of `(i, j, k)` in lexicographic order. The search keeps the
//! first strict minimum, so this order is the tie-break.

use crate::common::{GL3_ORDER, MAX_SELECTOR};

use super::Solution;
use super::basis::gemv;
use super::cost::diagonal_cost;

/// Three 3-bit row selectors, i.e. one 3×3 binary coefficient matrix.
pub type Coefficients = [u8; 3];

/// Index orders of a sorted triple, lexicographic.
const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Every invertible 3×3 binary matrix, in search order.
pub const GL3_TABLE: [Coefficients; GL3_ORDER] = build_table();

const fn build_table() -> [Coefficients; GL3_ORDER] {
    let mut table = [[0u8; 3]; GL3_ORDER];
    let mut count = 0;

    let mut i = 1;
    while i <= MAX_SELECTOR {
        let mut j = i + 1;
        while j <= MAX_SELECTOR {
            let mut k = j + 1;
            while k <= MAX_SELECTOR {
                if i ^ j != k {
                    let sorted = [i, j, k];
                    let mut p = 0;
                    while p < PERMUTATIONS.len() {
                        let [a, b, c] = PERMUTATIONS[p];
                        table[count] = [sorted[a], sorted[b], sorted[c]];
                        count += 1;
                        p += 1;
                    }
                }
                k += 1;
            }
            j += 1;
        }
        i += 1;
    }

    assert!(count == GL3_ORDER, "GL(3,2) table size mismatch");
    table
}

/// Checks whether a coefficient triple is an invertible matrix.
pub const fn is_invertible(coefficients: Coefficients) -> bool {
    let [a, b, c] = coefficients;
    a != 0 && b != 0 && c != 0 && a != b && a != c && b != c && (a ^ b) != c
}

/// Applies a coefficient matrix to the basic rows.
pub fn combine(rows: &[u32], coefficients: Coefficients) -> [u32; 3] {
    coefficients.map(|selector| gemv(rows, selector))
}

/// Finds the cheapest recombination of the basic rows.
///
/// # Arguments
///
/// * `bits` - Address width, forwarded to the cost function.
/// * `rows` - The basic complement rows.
///
/// # Returns
///
/// The first candidate in table order that reaches the minimum cost.
pub fn minimize(bits: u32, rows: &[u32]) -> Solution {
    let score = |coefficients: Coefficients| {
        let transform = combine(rows, coefficients);
        Solution {
            rows: transform,
            cost: diagonal_cost(bits, &transform),
        }
    };

    GL3_TABLE[1..]
        .iter()
        .fold(score(GL3_TABLE[0]), |best, &coefficients| {
            let candidate = score(coefficients);
            if candidate.cost < best.cost {
                candidate
            } else {
                best
            }
        })
}
