//! Canonical cache key for a (bit width, pattern list) query.
//!
//! Two queries that differ only in the order of their patterns, or in the order
//! of the components inside a pattern, describe the same problem. The key
//! canonicalizes both orders so such queries share one cache entry.

use std::hash::{Hash, Hasher};

use super::AccessPattern;

/// Order-independent key for a solver query.
///
/// Construction:
/// 1. Each pattern's components are sorted ascending.
/// 2. The pattern list is sorted by each pattern's fold hash, with the sorted
///    components breaking ties so equal multisets always give equal sequences.
/// 3. The key hash is the XOR of every pattern's fold hash.
///
/// The XOR-combined hash can collide for different pattern multisets, so
/// equality always finishes with a pairwise comparison of the canonical
/// sequences.
#[derive(Clone, Debug)]
pub struct PatternKey {
    bits: u32,
    hash: u32,
    patterns: Vec<AccessPattern>,
}

impl PatternKey {
    /// Builds the canonical key for `patterns` over `bits` address bits.
    ///
    /// # Arguments
    ///
    /// * `bits` - Address width of the query.
    /// * `patterns` - Patterns in caller order.
    ///
    /// # Returns
    ///
    /// A `PatternKey` equal to the key of any reordering of the same input.
    pub fn new(bits: u32, patterns: &[AccessPattern]) -> Self {
        let mut canonical: Vec<AccessPattern> =
            patterns.iter().map(AccessPattern::sorted).collect();
        canonical.sort_unstable_by_key(|pattern| (pattern.fold_hash(), *pattern));

        let hash = canonical
            .iter()
            .fold(0, |acc, pattern| acc ^ pattern.fold_hash());

        Self {
            bits,
            hash,
            patterns: canonical,
        }
    }

    /// Address width of the query.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// XOR of all pattern fold hashes.
    #[inline]
    pub const fn combined_hash(&self) -> u32 {
        self.hash
    }

    /// Patterns in canonical order.
    #[inline]
    pub fn patterns(&self) -> &[AccessPattern] {
        &self.patterns
    }
}

impl PartialEq for PatternKey {
    fn eq(&self, other: &Self) -> bool {
        if self.bits != other.bits || self.hash != other.hash {
            return false;
        }
        if self.patterns.len() != other.patterns.len() {
            return false;
        }
        self.patterns
            .iter()
            .zip(&other.patterns)
            .all(|(lhs, rhs)| lhs == rhs)
    }
}

impl Eq for PatternKey {}

impl Hash for PatternKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.bits);
        state.write_u32(self.hash);
    }
}
