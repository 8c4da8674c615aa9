//! Root-finding algorithms.
//!
//! This module provides the single-root search used by the extractor:
//!
//! - [`newton_raphson`]: quadratic convergence from one starting point
//! - [`locate_root`]: Newton-Raphson over an ordered [`GuessSet`], falling
//!   through to the next guess when one diverges or hits a flat tangent
//!
//! # Example
//!
//! ```rust
//! use polyroot_math::solvers::{locate_root, GuessSet, SolverConfig};
//! use polyroot_math::Polynomial;
//!
//! // x^2 - 1: the tangent is flat at the first guess (0.0), so the
//! // second guess (1.0) is the one that lands on a root.
//! let p = Polynomial::from(vec![1.0, 0.0, -1.0]);
//! let found = locate_root(&p, &GuessSet::default(), &SolverConfig::default()).unwrap();
//! assert!((found.root - 1.0).abs() < 1e-10);
//! ```

mod guess;
mod locate;
mod newton;

pub use guess::GuessSet;
pub use locate::locate_root;
pub use newton::newton_raphson;

use serde::{Deserialize, Serialize};

use crate::polynomial::Polynomial;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Step-size tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations per starting guess.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used from the successful guess.
    pub iterations: u32,
    /// Function value at the root.
    pub residual: f64,
}

/// Strategy for finding one real root of a polynomial.
///
/// The extractor calls this once per degree. Returning `None` is the normal
/// way to report that no guess converged; it is not an error.
pub trait RootLocator: Send + Sync {
    /// Finds a single root, trying `guesses` in order.
    fn locate(
        &self,
        polynomial: &Polynomial,
        guesses: &GuessSet,
        config: &SolverConfig,
    ) -> Option<SolverResult>;

    /// Returns the name of the locator.
    fn name(&self) -> &'static str;
}

/// Multi-guess Newton-Raphson locator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonLocator;

impl RootLocator for NewtonLocator {
    fn locate(
        &self,
        polynomial: &Polynomial,
        guesses: &GuessSet,
        config: &SolverConfig,
    ) -> Option<SolverResult> {
        locate_root(polynomial, guesses, config)
    }

    fn name(&self) -> &'static str {
        "Newton-Raphson"
    }
}
