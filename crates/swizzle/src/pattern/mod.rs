//! Access patterns and their canonical cache keys.
//!
//! This module provides the input side of the solver:
//! 1. **Patterns:** `AccessPattern`, the rank-3 validity check, and the
//!    single-step elimination used by the search.
//! 2. **Keys:** `PatternKey`, the order-independent canonical form used to
//!    index the memoization cache.

/// Access pattern type and rank check.
pub mod access;

/// Canonical pattern-list key.
pub mod key;

pub use access::AccessPattern;
pub use key::PatternKey;
