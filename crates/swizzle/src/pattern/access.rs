//! Access pattern representation.
//!
//! An access pattern is the address-bit footprint of one memory access split
//! into three logical dimensions. Each component is a bitmask over the address
//! bits, i.e. a vector over GF(2). The pattern is only useful to the solver
//! while its three components stay linearly independent (rank 3).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::is_set;

/// Three address-bit masks describing the dimensions of one access.
///
/// Components are stored in the order given by the caller; canonical order is
/// only imposed when the pattern is folded into a
/// [`PatternKey`](super::PatternKey).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessPattern(pub [u32; 3]);

impl AccessPattern {
    /// Creates a pattern from its three component masks.
    #[inline]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self([a, b, c])
    }

    /// Returns the three component masks.
    #[inline]
    pub const fn components(&self) -> [u32; 3] {
        self.0
    }

    /// Checks whether the three components are linearly independent over GF(2).
    ///
    /// For three vectors this reduces to: none is zero, all are pairwise
    /// distinct, and no component is the XOR of the other two. Only
    /// `a ^ b != c` needs testing for the last condition, since
    /// `a ^ b == c`, `a ^ c == b` and `b ^ c == a` are equivalent.
    ///
    /// # Returns
    ///
    /// `true` if the pattern has rank 3.
    #[inline]
    pub const fn is_rank_three(&self) -> bool {
        let [a, b, c] = self.0;
        a != 0 && b != 0 && c != 0 && a != b && a != c && b != c && (a ^ b) != c
    }

    /// Per-pattern hash: the XOR of the three components.
    ///
    /// Independent of component order, so a pattern and its sorted form hash
    /// identically.
    #[inline]
    pub const fn fold_hash(&self) -> u32 {
        let [a, b, c] = self.0;
        a ^ b ^ c
    }

    /// Returns the pattern with its components sorted ascending.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut components = self.0;
        components.sort_unstable();
        Self(components)
    }

    /// Applies one elimination step.
    ///
    /// Every component that has bit `primary` set is XOR-ed with `vector`.
    /// With `vector` containing bit `primary`, this clears the primary bit
    /// from the pattern, i.e. reduces it modulo `vector`.
    ///
    /// # Arguments
    ///
    /// * `vector` - The elimination vector.
    /// * `primary` - Bit index of the vector's primary dimension.
    #[inline]
    #[must_use]
    pub const fn eliminate(&self, vector: u32, primary: u32) -> Self {
        let mut components = self.0;
        let mut i = 0;
        while i < components.len() {
            if is_set(components[i], primary) {
                components[i] ^= vector;
            }
            i += 1;
        }
        Self(components)
    }
}

impl From<[u32; 3]> for AccessPattern {
    fn from(components: [u32; 3]) -> Self {
        Self(components)
    }
}

impl From<(u32, u32, u32)> for AccessPattern {
    fn from((a, b, c): (u32, u32, u32)) -> Self {
        Self([a, b, c])
    }
}

impl fmt::Display for AccessPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "({a:#x}, {b:#x}, {c:#x})")
    }
}
