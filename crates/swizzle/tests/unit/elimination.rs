//! Elimination Search Tests.
//!
//! Verifies the submask descent, the per-round candidate choice, the
//! row-reduction pass, and the construction of the basic complement rows.

use pretty_assertions::assert_eq;
use swizzle_core::solver::{
    Elimination, SubmaskDescent, basic_rows, build_elimination_basis, gemv,
};

use crate::common::{init_tracing, patterns};

// ──────────────────────────────────────────────────────────
// 1. Submask descent
// ──────────────────────────────────────────────────────────

#[test]
fn descent_visits_every_proper_submask_once() {
    let mask = 0b1011_0110;
    let submasks: Vec<u32> = SubmaskDescent::new(mask).collect();

    assert_eq!(submasks.len(), (1 << mask.count_ones()) - 1);
    assert!(submasks.iter().all(|&s| s & !mask == 0 && s != mask));
    assert!(submasks.windows(2).all(|w| w[0] > w[1]));
    assert_eq!(submasks.last(), Some(&0));
}

#[test]
fn descent_of_single_bit_yields_only_empty() {
    let submasks: Vec<u32> = SubmaskDescent::new(0b100).collect();
    assert_eq!(submasks, vec![0]);
}

#[test]
fn descent_handles_full_width_mask() {
    let mut descent = SubmaskDescent::new(u32::MAX);
    assert_eq!(descent.next(), Some(u32::MAX - 1));
    assert_eq!(descent.next(), Some(u32::MAX - 2));
}

#[test]
fn descent_stays_exhausted() {
    let mut descent = SubmaskDescent::new(0b1);
    assert_eq!(descent.next(), Some(0));
    assert_eq!(descent.next(), None);
    assert_eq!(descent.next(), None);
}

// ──────────────────────────────────────────────────────────
// 2. Basis construction
// ──────────────────────────────────────────────────────────

#[test]
fn no_rounds_at_three_bits() {
    let basis = build_elimination_basis(3, &patterns(&[(1, 2, 4)])).unwrap();
    assert!(basis.pairs().is_empty());
    assert_eq!(basis.free_bits(3), 0b111);
}

#[test]
fn no_rounds_below_three_bits() {
    let basis = build_elimination_basis(2, &[]).unwrap();
    assert!(basis.pairs().is_empty());
    assert_eq!(basis.free_bits(2), 0b11);
}

#[test]
fn empty_pattern_list_takes_first_candidate() {
    // The first candidate of a round is the lowest allowed bit on its own.
    let basis = build_elimination_basis(4, &[]).unwrap();
    assert_eq!(
        basis.pairs(),
        &[Elimination {
            vector: 0b0001,
            primary: 0
        }]
    );
}

#[test]
fn candidates_that_collapse_a_pattern_are_skipped() {
    init_tracing();
    // Every larger candidate collapses one of the two patterns; the first
    // survivor folds 4 into 8.
    let basis = build_elimination_basis(4, &patterns(&[(1, 2, 4), (1, 2, 8)])).unwrap();
    assert_eq!(
        basis.pairs(),
        &[Elimination {
            vector: 0b1100,
            primary: 2
        }]
    );
    assert_eq!(basis.prohibited(), 0b0100);
    assert_eq!(basis.free_bits(4), 0b1011);
}

#[test]
fn rounds_claim_distinct_primaries() {
    let basis = build_elimination_basis(6, &patterns(&[(1, 2, 4), (8, 16, 32)])).unwrap();
    let primaries: Vec<u32> = basis.pairs().iter().map(|e| e.primary).collect();
    assert_eq!(primaries, vec![0, 1, 2]);
    assert_eq!(basis.prohibited(), 0b000111);
    for elimination in basis.pairs() {
        assert_ne!(elimination.vector & elimination.primary_mask(), 0);
    }
}

#[test]
fn exhausted_round_means_no_basis() {
    init_tracing();
    // Third components 4, 8, 12 span a plane that one kernel vector cannot
    // fold without collapsing one of the patterns.
    let result = build_elimination_basis(4, &patterns(&[(1, 2, 4), (1, 2, 8), (1, 2, 12)]));
    assert!(result.is_none());
}

// ──────────────────────────────────────────────────────────
// 3. Reduction and basic rows
// ──────────────────────────────────────────────────────────

#[test]
fn reduce_rewrites_dependencies_on_later_primaries() {
    let mut basis =
        build_elimination_basis(5, &patterns(&[(1, 2, 4), (1, 2, 8), (1, 2, 16)])).unwrap();
    assert_eq!(
        basis.pairs(),
        &[
            Elimination {
                vector: 0b01100,
                primary: 2
            },
            Elimination {
                vector: 0b11000,
                primary: 3
            },
        ]
    );

    basis.reduce();
    assert_eq!(
        basis.pairs(),
        &[
            Elimination {
                vector: 0b10100,
                primary: 2
            },
            Elimination {
                vector: 0b11000,
                primary: 3
            },
        ]
    );
    // Outside its own primary, every vector only touches free bits.
    let free = basis.free_bits(5);
    for elimination in basis.pairs() {
        assert_eq!(elimination.vector & !elimination.primary_mask() & !free, 0);
    }
}

#[test]
fn basic_rows_carry_dependent_primaries() {
    let mut basis =
        build_elimination_basis(5, &patterns(&[(1, 2, 4), (1, 2, 8), (1, 2, 16)])).unwrap();
    basis.reduce();
    assert_eq!(basic_rows(5, &basis), vec![0b00001, 0b00010, 0b11100]);
}

#[test]
fn basic_rows_are_orthogonal_to_the_kernel() {
    let mut basis = build_elimination_basis(8, &patterns(&[(1, 2, 4), (16, 32, 64)])).unwrap();
    basis.reduce();
    let rows = basic_rows(8, &basis);
    assert_eq!(rows.len(), 3);
    for row in &rows {
        for elimination in basis.pairs() {
            assert_eq!((row & elimination.vector).count_ones() % 2, 0);
        }
    }
}

#[test]
fn gemv_selects_rows_by_bit() {
    let rows = [0b001, 0b010, 0b100];
    assert_eq!(gemv(&rows, 0b000), 0);
    assert_eq!(gemv(&rows, 0b101), 0b101);
    assert_eq!(gemv(&[0b011, 0b110, 0b100], 0b111), 0b001);
    // Selector bits with no matching row are ignored.
    assert_eq!(gemv(&[0b1], 0b110), 0);
}
