//! Address-swizzle solver library.
//!
//! This crate computes XOR-based address swizzle transforms over GF(2) with the following:
//! 1. **Patterns:** Access patterns, the rank-3 validity check, and canonical cache keys.
//! 2. **Solver:** Elimination search, basis reduction, and cost minimization over GL(3,2).
//! 3. **Cost:** The diagonal cost heuristic, usable on external transforms.
//! 4. **Cache:** Memoization of query results under canonical keys, single-owner or shared.
//! 5. **Support:** Configuration, error types, and cache statistics.
//!
//! ```
//! use swizzle_core::{AccessPattern, SwizzleCache};
//!
//! let mut cache = SwizzleCache::new();
//! let patterns = [AccessPattern::new(1, 2, 4)];
//! let solution = cache.query(3, &patterns)?.ok_or("no solution")?;
//! assert_eq!(solution.cost, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Memoizing cache (`SwizzleCache`, `SharedSwizzleCache`).
pub mod cache;
/// Common helpers, constants and error types.
pub mod common;
/// Solver configuration (defaults, JSON loading, validation).
pub mod config;
/// Access patterns and canonical keys.
pub mod pattern;
/// GF(2) solver (elimination, basis, GL(3,2) search, cost, verification).
pub mod solver;
/// Cache statistics.
pub mod stats;

/// Single-owner memoizing cache; the main entry point for queries.
pub use crate::cache::{SharedSwizzleCache, SwizzleCache};
/// Error type and result alias.
pub use crate::common::{Result, SwizzleError};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Pattern types.
pub use crate::pattern::{AccessPattern, PatternKey};
/// Solver types and the standalone cost function.
pub use crate::solver::{Solution, SwizzleSolver, diagonal_cost, solve, verify_solution};
/// Cache usage counters.
pub use crate::stats::CacheStats;
