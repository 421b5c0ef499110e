//! Cache statistics collection and reporting.
//!
//! Tracks how the memoization cache is used:
//! 1. **Lookups:** Total queries answered.
//! 2. **Hits and Misses:** Queries served from the cache vs. solved.
//! 3. **Unsolvable:** Solved queries whose answer was "no solution".

use std::fmt;

/// Counters kept by [`SwizzleCache`](crate::cache::SwizzleCache).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Queries answered (hits + misses).
    pub lookups: u64,
    /// Queries answered from a stored entry.
    pub hits: u64,
    /// Queries that ran the solver.
    pub misses: u64,
    /// Solver runs that found no valid transform.
    pub unsolvable: u64,
}

impl CacheStats {
    /// Fraction of lookups served from the cache, or 0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            return 0.0;
        }
        self.hits as f64 / self.lookups as f64
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "swizzle_cache.lookups      {}", self.lookups)?;
        writeln!(f, "swizzle_cache.hits         {}", self.hits)?;
        writeln!(f, "swizzle_cache.misses       {}", self.misses)?;
        writeln!(f, "swizzle_cache.unsolvable   {}", self.unsolvable)?;
        write!(f, "swizzle_cache.hit_rate     {:.4}", self.hit_rate())
    }
}
