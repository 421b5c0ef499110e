//! Elimination search.
//!
//! Builds the kernel space of the swizzle transform one vector at a time. Each
//! vector claims a primary bit position, and reducing every access pattern by
//! the vectors chosen so far must never drop any pattern below rank 3. After
//! `bits - 3` rounds, the three positions no vector claimed are the free
//! dimensions the complement basis is built on.
//!
//! # Performance
//!
//! - **Time Complexity:** O(bits × 2^bits × P) worst case, where P is the
//!   number of patterns. Each round walks the submasks of the still-allowed
//!   positions, and the first acceptable candidate ends the round.
//! - **Space Complexity:** O(P) for the working copy of the reduced patterns.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::common::{PATTERN_RANK, bit_mask, single_bit};
use crate::pattern::AccessPattern;

/// Walks the proper submasks of a mask from largest to smallest.
///
/// The full mask itself is never produced. The empty submask is the final
/// item, after which the iterator is exhausted. A zero mask has no proper
/// submasks and yields nothing.
#[derive(Clone, Copy, Debug)]
pub struct SubmaskDescent {
    mask: u32,
    next: Option<u32>,
}

impl SubmaskDescent {
    /// Starts the descent just below `mask`.
    pub const fn new(mask: u32) -> Self {
        let next = if mask == 0 {
            None
        } else {
            Some((mask - 1) & mask)
        };
        Self { mask, next }
    }
}

impl Iterator for SubmaskDescent {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let current = self.next?;
        self.next = if current == 0 {
            None
        } else {
            Some((current - 1) & self.mask)
        };
        Some(current)
    }
}

impl FusedIterator for SubmaskDescent {}

/// A kernel vector paired with the primary bit it eliminates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Elimination {
    /// The kernel vector.
    pub vector: u32,
    /// Bit index of the primary dimension (always set in `vector` when built).
    pub primary: u32,
}

impl Elimination {
    /// Mask with only the primary bit set.
    #[inline]
    pub const fn primary_mask(&self) -> u32 {
        single_bit(self.primary)
    }
}

/// Ordered list of accepted eliminations plus the primary bits they claim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EliminationBasis {
    pairs: Vec<Elimination>,
    prohibited: u32,
}

impl EliminationBasis {
    /// Eliminations in construction order.
    pub fn pairs(&self) -> &[Elimination] {
        &self.pairs
    }

    /// Mask of every bit claimed as a primary dimension.
    pub const fn prohibited(&self) -> u32 {
        self.prohibited
    }

    /// Bits of a `bits`-wide address never claimed as a primary dimension.
    pub const fn free_bits(&self, bits: u32) -> u32 {
        bit_mask(bits) & !self.prohibited
    }

    fn push(&mut self, elimination: Elimination) {
        self.prohibited |= elimination.primary_mask();
        self.pairs.push(elimination);
    }

    /// Row-reduces the basis so that every vector depends only on free bits.
    ///
    /// Vectors built early may contain primary bits claimed later. Walking the
    /// list backwards, each vector is XOR-ed into every earlier vector that
    /// still contains its primary bit.
    pub fn reduce(&mut self) {
        for current in (0..self.pairs.len()).rev() {
            let Elimination { vector, primary } = self.pairs[current];
            let primary_bit = single_bit(primary);
            for earlier in &mut self.pairs[..current] {
                if earlier.vector & primary_bit != 0 {
                    earlier.vector ^= vector;
                }
            }
        }
    }
}

/// Reduces every pattern by one candidate, failing on the first rank loss.
fn try_eliminate(
    patterns: &[AccessPattern],
    vector: u32,
    primary: u32,
) -> Option<Vec<AccessPattern>> {
    patterns
        .iter()
        .map(|pattern| {
            let reduced = pattern.eliminate(vector, primary);
            reduced.is_rank_three().then_some(reduced)
        })
        .collect()
}

/// Runs the elimination search.
///
/// Each round enumerates the proper submasks of the allowed positions from
/// largest to smallest. The candidate vector is the allowed positions outside
/// the submask, and its primary bit is the candidate's lowest set bit. The
/// first candidate under which every pattern keeps rank 3 is committed.
///
/// # Arguments
///
/// * `bits` - Address width; `bits - 3` rounds are run (none when `bits <= 3`).
/// * `patterns` - Patterns already known to be rank 3.
///
/// # Returns
///
/// The unreduced basis, or `None` if some round has no acceptable candidate.
pub fn build_elimination_basis(bits: u32, patterns: &[AccessPattern]) -> Option<EliminationBasis> {
    let mask = bit_mask(bits);
    let rounds = bits.saturating_sub(PATTERN_RANK);

    let mut basis = EliminationBasis::default();
    let mut working = patterns.to_vec();

    for round in 0..rounds {
        let allowed = mask & !basis.prohibited;

        let accepted = SubmaskDescent::new(allowed).find_map(|submask| {
            let vector = allowed & !submask;
            let primary = vector.trailing_zeros();
            let reduced = try_eliminate(&working, vector, primary);
            if reduced.is_none() {
                trace!(round, vector, primary, "candidate collapses a pattern");
            }
            reduced.map(|reduced| (Elimination { vector, primary }, reduced))
        });

        let Some((elimination, reduced)) = accepted else {
            debug!(round, allowed, "no elimination vector keeps every pattern at rank 3");
            return None;
        };

        debug!(
            round,
            vector = elimination.vector,
            primary = elimination.primary,
            "accepted elimination vector"
        );
        basis.push(elimination);
        working = reduced;
    }

    Some(basis)
}
