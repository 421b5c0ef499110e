//! Memoizing Swizzle Cache.
//!
//! The same handful of (bit width, pattern set) queries recur across many call
//! sites of a compiler pass, so answers are memoized under their canonical
//! [`PatternKey`]. Both outcomes are stored: a cached "no solution" is returned
//! as-is without rerunning the search.
//!
//! Entries are never evicted and never change once inserted. The cache lives
//! as long as its owner; pass it by reference into the code that issues
//! queries. [`SwizzleCache`] takes `&mut self` and is meant for a single
//! owner. [`SharedSwizzleCache`] wraps it in a mutex for concurrent callers.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::common::Result;
use crate::config::Config;
use crate::pattern::{AccessPattern, PatternKey};
use crate::solver::{Solution, SwizzleSolver};
use crate::stats::CacheStats;

/// Memoizing front end for the swizzle solver.
#[derive(Debug)]
pub struct SwizzleCache {
    /// When false, queries bypass the map and always run the solver.
    pub enabled: bool,
    entries: HashMap<PatternKey, Option<Solution>>,
    solver: SwizzleSolver,
    stats: CacheStats,
}

impl Default for SwizzleCache {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl SwizzleCache {
    /// Creates a cache with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache from a configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Solver and cache settings.
    ///
    /// # Errors
    ///
    /// Returns [`SwizzleError::InvalidConfig`](crate::common::SwizzleError::InvalidConfig)
    /// if the configuration does not validate.
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: &Config) -> Self {
        Self {
            enabled: config.cache.enabled,
            entries: HashMap::with_capacity(config.cache.initial_capacity),
            solver: SwizzleSolver::new(config.solver.clone()),
            stats: CacheStats::default(),
        }
    }

    /// Answers a query, solving it only on the first request.
    ///
    /// Components must fit within `bits`. Bits above the width are invisible to
    /// the transform, so a solution for such a pattern may not pass
    /// [`verify_solution`](crate::solver::verify_solution).
    ///
    /// # Arguments
    ///
    /// * `bits` - Address width.
    /// * `patterns` - Access patterns; order inside and across patterns is ignored.
    ///
    /// # Returns
    ///
    /// `Ok(Some(solution))`, or `Ok(None)` when no valid transform exists.
    ///
    /// # Errors
    ///
    /// Returns [`SwizzleError::BitWidthOutOfRange`](crate::common::SwizzleError::BitWidthOutOfRange)
    /// when `bits` exceeds the configured maximum. Nothing is cached in that case.
    pub fn query(&mut self, bits: u32, patterns: &[AccessPattern]) -> Result<Option<Solution>> {
        self.solver.check_bits(bits)?;
        self.stats.lookups += 1;

        if !self.enabled {
            return Ok(Self::record_miss(
                &mut self.stats,
                &self.solver,
                bits,
                patterns,
            ));
        }

        match self.entries.entry(PatternKey::new(bits, patterns)) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                trace!(bits, patterns = patterns.len(), "swizzle cache hit");
                Ok(*entry.get())
            }
            Entry::Vacant(entry) => {
                debug!(bits, patterns = patterns.len(), "swizzle cache miss");
                let result = Self::record_miss(&mut self.stats, &self.solver, bits, patterns);
                let _ = entry.insert(result);
                Ok(result)
            }
        }
    }

    fn record_miss(
        stats: &mut CacheStats,
        solver: &SwizzleSolver,
        bits: u32,
        patterns: &[AccessPattern],
    ) -> Option<Solution> {
        stats.misses += 1;
        let result = solver.solve_unchecked(bits, patterns);
        if result.is_none() {
            stats.unsolvable += 1;
        }
        result
    }

    /// Looks up a stored answer without solving.
    ///
    /// # Returns
    ///
    /// `None` if the query was never answered, otherwise the stored outcome.
    pub fn peek(&self, bits: u32, patterns: &[AccessPattern]) -> Option<Option<Solution>> {
        self.entries.get(&PatternKey::new(bits, patterns)).copied()
    }

    /// Whether an answer for this query is stored.
    pub fn contains(&self, bits: u32, patterns: &[AccessPattern]) -> bool {
        self.entries.contains_key(&PatternKey::new(bits, patterns))
    }

    /// Number of stored answers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no answer is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Usage counters.
    pub const fn stats(&self) -> CacheStats {
        self.stats
    }

    /// The solver used on misses.
    pub const fn solver(&self) -> &SwizzleSolver {
        &self.solver
    }
}

/// Thread-safe wrapper around [`SwizzleCache`].
///
/// Every query takes the lock for its full duration, so a miss is solved
/// exactly once even when several threads ask for it together. Stored values
/// are immutable, so a lock poisoned by a panicking caller is recovered.
#[derive(Debug, Default)]
pub struct SharedSwizzleCache {
    inner: Mutex<SwizzleCache>,
}

impl SharedSwizzleCache {
    /// Wraps an existing cache.
    pub const fn new(cache: SwizzleCache) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// Creates a shared cache from a configuration.
    ///
    /// # Errors
    ///
    /// Same as [`SwizzleCache::with_config`].
    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self::new(SwizzleCache::with_config(config)?))
    }

    fn lock(&self) -> MutexGuard<'_, SwizzleCache> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Answers a query; see [`SwizzleCache::query`].
    ///
    /// # Errors
    ///
    /// Same as [`SwizzleCache::query`].
    pub fn query(&self, bits: u32, patterns: &[AccessPattern]) -> Result<Option<Solution>> {
        self.lock().query(bits, patterns)
    }

    /// Usage counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    /// Number of stored answers.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no answer is stored.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Unwraps the inner cache.
    pub fn into_inner(self) -> SwizzleCache {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
