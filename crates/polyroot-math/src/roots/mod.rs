//! Extraction of all real roots by repeated locate/deflate cycles.
//!
//! Each cycle finds one root of the current polynomial with a
//! [`RootLocator`](crate::solvers::RootLocator), records it rounded to a
//! fixed number of decimals, then divides the root out. The loop ends when
//! the polynomial is constant, when no guess converges, or when a root is
//! found again (which happens with repeated roots or imprecise deflation).
//!
//! | Outcome | [`Termination`] |
//! |---------|-----------------|
//! | Degree reached zero | `Complete` |
//! | Locator returned nothing | `NoConvergence` |
//! | Root within tolerance of one already found | `DuplicateRoot` |

mod extractor;

pub use extractor::RootExtractor;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::polynomial::Polynomial;
use crate::solvers::{GuessSet, SolverConfig};

/// Default number of decimal places kept for each recorded root.
pub const DEFAULT_PRECISION: u32 = 8;

/// Default distance under which two roots are considered the same.
pub const DEFAULT_DUPLICATE_TOLERANCE: f64 = 1e-6;

/// Largest precision accepted by [`ExtractionConfig::validate`].
pub const MAX_PRECISION: u32 = 15;

/// Settings for a full extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Starting guesses, in priority order.
    pub guesses: GuessSet,
    /// Decimal places kept when recording a root.
    pub precision: u32,
    /// Roots closer than this to a recorded root end the extraction.
    pub duplicate_tolerance: f64,
    /// Newton-Raphson settings used for every locate step.
    pub solver: SolverConfig,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            guesses: GuessSet::default(),
            precision: DEFAULT_PRECISION,
            duplicate_tolerance: DEFAULT_DUPLICATE_TOLERANCE,
            solver: SolverConfig::default(),
        }
    }
}

impl ExtractionConfig {
    /// Sets the solver configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the starting guesses.
    #[must_use]
    pub fn with_guesses(mut self, guesses: impl Into<GuessSet>) -> Self {
        self.guesses = guesses.into();
        self
    }

    /// Sets the rounding precision.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the duplicate tolerance.
    #[must_use]
    pub fn with_duplicate_tolerance(mut self, tolerance: f64) -> Self {
        self.duplicate_tolerance = tolerance;
        self
    }

    /// Checks that the settings can drive an extraction.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.solver.tolerance.is_finite() && self.solver.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive, got {}",
                self.solver.tolerance
            )));
        }
        if self.solver.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be at least 1"));
        }
        if self.guesses.is_empty() {
            return Err(MathError::invalid_input("guess set is empty"));
        }
        if let Some(bad) = self.guesses.iter().find(|g| !g.is_finite()) {
            return Err(MathError::invalid_input(format!(
                "guesses must be finite, got {}",
                bad
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(MathError::invalid_input(format!(
                "precision must be at most {}, got {}",
                MAX_PRECISION, self.precision
            )));
        }
        if !(self.duplicate_tolerance.is_finite() && self.duplicate_tolerance >= 0.0) {
            return Err(MathError::invalid_input(format!(
                "duplicate_tolerance must be non-negative, got {}",
                self.duplicate_tolerance
            )));
        }
        Ok(())
    }
}

/// Why an extraction stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The polynomial was deflated down to a constant.
    Complete,
    /// No starting guess converged on the remaining polynomial.
    NoConvergence,
    /// A root matched one already recorded.
    DuplicateRoot,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Complete => "complete",
            Self::NoConvergence => "no convergence",
            Self::DuplicateRoot => "duplicate root",
        })
    }
}

/// Outcome of an extraction run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    /// Rounded roots in discovery order.
    pub roots: Vec<f64>,
    /// Why the loop stopped.
    pub termination: Termination,
    /// The polynomial left after the last deflation.
    pub remaining: Polynomial,
}

impl Extraction {
    /// Returns true if every root was divided out.
    pub fn is_complete(&self) -> bool {
        self.termination == Termination::Complete
    }
}

/// Rounds `value` to `digits` decimal places.
///
/// Values too large to scale are returned unchanged.
///
/// # Example
///
/// ```rust
/// use polyroot_math::roots::round_to;
///
/// assert_eq!(round_to(1.999999999, 8), 2.0);
/// assert_eq!(round_to(-0.123456789, 3), -0.123);
/// ```
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}

/// Finds all real roots of a polynomial with default settings.
///
/// Coefficients are ordered highest degree first. Roots are returned in
/// discovery order, each rounded to 8 decimal places. Repeated roots appear
/// once. An incomplete extraction is not reported; use [`RootExtractor`]
/// when the caller needs to know.
///
/// # Example
///
/// ```rust
/// use polyroot_math::extract_all_roots;
///
/// // x^4 - 10x^2 + 9 = (x - 1)(x + 1)(x - 3)(x + 3)
/// let roots = extract_all_roots(&[1.0, 0.0, -10.0, 0.0, 9.0]);
/// assert_eq!(roots, vec![1.0, -1.0, 3.0, -3.0]);
/// ```
pub fn extract_all_roots(coefficients: &[f64]) -> Vec<f64> {
    RootExtractor::default()
        .extract(&Polynomial::from(coefficients))
        .roots
}
