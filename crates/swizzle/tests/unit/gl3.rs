//! GL(3,2) Search Tests.
//!
//! Verifies the precomputed table of invertible 3×3 binary matrices (size,
//! invertibility, uniqueness, order) and the first-minimum tie-break of the
//! cost search.

use std::collections::HashSet;

use swizzle_core::common::GL3_ORDER;
use swizzle_core::solver::gl3::{GL3_TABLE, combine, is_invertible, minimize};

#[test]
fn table_has_group_order_entries() {
    assert_eq!(GL3_TABLE.len(), GL3_ORDER);
    assert_eq!(GL3_ORDER, 168);
}

#[test]
fn table_entries_are_invertible_and_unique() {
    let unique: HashSet<[u8; 3]> = GL3_TABLE.iter().copied().collect();
    assert_eq!(unique.len(), GL3_ORDER);
    assert!(GL3_TABLE.iter().all(|&c| is_invertible(c)));
}

/// Brute force over all 7^3 nonzero selector triples: exactly the table
/// entries are invertible.
#[test]
fn table_covers_every_invertible_matrix() {
    let table: HashSet<[u8; 3]> = GL3_TABLE.iter().copied().collect();
    let mut invertible = 0;
    for a in 1..=7u8 {
        for b in 1..=7u8 {
            for c in 1..=7u8 {
                if is_invertible([a, b, c]) {
                    invertible += 1;
                    assert!(table.contains(&[a, b, c]));
                }
            }
        }
    }
    assert_eq!(invertible, GL3_ORDER);
}

#[test]
fn table_order_is_sorted_triples_then_lexicographic_permutations() {
    assert_eq!(
        &GL3_TABLE[..8],
        &[
            [1, 2, 4],
            [1, 4, 2],
            [2, 1, 4],
            [2, 4, 1],
            [4, 1, 2],
            [4, 2, 1],
            [1, 2, 5],
            [1, 5, 2],
        ]
    );
    assert_eq!(GL3_TABLE[GL3_ORDER - 1], [7, 6, 5]);
}

#[test]
fn singular_triples_are_rejected() {
    assert!(!is_invertible([1, 2, 3]));
    assert!(!is_invertible([1, 1, 2]));
    assert!(!is_invertible([0, 1, 2]));
    assert!(!is_invertible([7, 5, 2]));
}

#[test]
fn combine_applies_each_selector() {
    assert_eq!(combine(&[0b001, 0b010, 0b100], [1, 2, 4]), [1, 2, 4]);
    assert_eq!(combine(&[0b001, 0b010, 0b100], [3, 6, 7]), [3, 6, 7]);
    assert_eq!(combine(&[9, 18, 36], [3, 1, 4]), [27, 9, 36]);
}

#[test]
fn minimize_identity_basis_picks_identity() {
    let best = minimize(3, &[1, 2, 4]);
    assert_eq!(best.rows, [1, 2, 4]);
    assert_eq!(best.cost, 1);
}

#[test]
fn minimize_keeps_first_minimum() {
    // All-zero rows tie every candidate at cost 1; the first entry wins.
    let best = minimize(0, &[]);
    assert_eq!(best.rows, [0, 0, 0]);
    assert_eq!(best.cost, 1);

    // Two rows: entry 0 ([1, 2, 4] -> [1, 2, 0]) already reaches cost 1.
    let best = minimize(2, &[1, 2]);
    assert_eq!(best.rows, [1, 2, 0]);
    assert_eq!(best.cost, 1);
}

#[test]
fn minimize_scores_every_candidate_no_worse() {
    let rows = [1, 2, 12];
    let best = minimize(4, &rows);
    assert_eq!(best.rows, [1, 2, 12]);
    assert_eq!(best.cost, 2);
    for &coefficients in &GL3_TABLE {
        let candidate = combine(&rows, coefficients);
        assert!(swizzle_core::diagonal_cost(4, &candidate) >= best.cost);
    }
}
