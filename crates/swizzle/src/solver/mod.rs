//! GF(2) swizzle solver.
//!
//! This module turns a (bit width, pattern list) query into a swizzle
//! transform. It provides:
//! 1. **Validity:** Every input pattern must have rank 3.
//! 2. **Elimination:** A kernel space of `bits - 3` vectors that keeps every
//!    pattern at rank 3.
//! 3. **Complement Basis:** Row reduction and the three basic rows.
//! 4. **Search:** Minimization of the diagonal cost over GL(3,2).
//! 5. **Verification:** An independent check of returned transforms.
//!
//! The solver is not memoized; see [`crate::cache`] for that.

/// Basic complement rows and GF(2) row combination.
pub mod basis;
/// Diagonal cost function.
pub mod cost;
/// Elimination search and basis reduction.
pub mod elimination;
/// GL(3,2) coefficient table and cost minimization.
pub mod gl3;
/// Independent solution verifier.
pub mod verify;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::common::{Result, ensure_bit_width};
use crate::config::SolverConfig;
use crate::pattern::AccessPattern;

pub use basis::{basic_rows, gemv};
pub use cost::diagonal_cost;
pub use elimination::{Elimination, EliminationBasis, SubmaskDescent, build_elimination_basis};
pub use gl3::{Coefficients, GL3_TABLE};
pub use verify::{Violation, verify_solution};

/// A swizzle transform together with its diagonal cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solution {
    /// The three transform rows, each a mask over the address bits.
    pub rows: [u32; 3],
    /// Diagonal cost of `rows`.
    pub cost: u32,
}

/// Un-memoized solver front end.
///
/// Holds the solver configuration and enforces the bit-width precondition
/// before running the search.
#[derive(Clone, Debug, Default)]
pub struct SwizzleSolver {
    config: SolverConfig,
}

impl SwizzleSolver {
    /// Creates a solver with the given configuration.
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Checks the bit-width precondition for a query.
    ///
    /// # Errors
    ///
    /// Returns [`SwizzleError::BitWidthOutOfRange`](crate::common::SwizzleError::BitWidthOutOfRange)
    /// when `bits` exceeds the configured maximum.
    pub fn check_bits(&self, bits: u32) -> Result<()> {
        ensure_bit_width(bits, self.config.max_bits)
    }

    /// Solves one query.
    ///
    /// Components must fit within `bits`. Bits above the width are invisible to
    /// the transform, so a solution for such a pattern may not pass
    /// [`verify_solution`](crate::solver::verify_solution).
    ///
    /// # Arguments
    ///
    /// * `bits` - Address width.
    /// * `patterns` - Access patterns in any order.
    ///
    /// # Returns
    ///
    /// `Ok(Some(solution))`, or `Ok(None)` when no valid transform exists.
    ///
    /// # Errors
    ///
    /// Fails only on the bit-width precondition.
    pub fn solve(&self, bits: u32, patterns: &[AccessPattern]) -> Result<Option<Solution>> {
        self.check_bits(bits)?;
        Ok(self.solve_unchecked(bits, patterns))
    }

    /// Solves a query whose bit width has already been checked.
    pub(crate) fn solve_unchecked(&self, bits: u32, patterns: &[AccessPattern]) -> Option<Solution> {
        let solution = solve_patterns(bits, patterns);
        if self.config.trace_solves {
            info!(
                bits,
                patterns = patterns.len(),
                rows = ?solution.map(|s| s.rows),
                cost = ?solution.map(|s| s.cost),
                "swizzle solve"
            );
        }
        solution
    }
}

/// Runs validity check, elimination, reduction and GL(3,2) search.
fn solve_patterns(bits: u32, patterns: &[AccessPattern]) -> Option<Solution> {
    if let Some(pattern) = patterns.iter().find(|pattern| !pattern.is_rank_three()) {
        debug!(%pattern, "pattern is not rank three");
        return None;
    }

    let mut basis = build_elimination_basis(bits, patterns)?;
    basis.reduce();

    let rows = basic_rows(bits, &basis);
    let solution = gl3::minimize(bits, &rows);
    debug!(bits, rows = ?solution.rows, cost = solution.cost, "swizzle solved");
    Some(solution)
}

/// Solves a query with the default solver configuration.
///
/// Components must fit within `bits`. Bits above the width are invisible to
/// the transform, so a solution for such a pattern may not pass
/// [`verify_solution`](crate::solver::verify_solution).
///
/// # Errors
///
/// Fails only when `bits` exceeds the mask width.
pub fn solve(bits: u32, patterns: &[AccessPattern]) -> Result<Option<Solution>> {
    SwizzleSolver::default().solve(bits, patterns)
}
