//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson iteration from a single starting point.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// `fdf` returns the function value and its derivative together, which is
/// what a Horner evaluation produces. Convergence is declared on step size:
/// once `|x_{n+1} - x_n| < tolerance`, `x_{n+1}` is returned.
///
/// # Arguments
///
/// * `fdf` - Returns `(f(x), f'(x))`
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// * [`MathError::DivisionByZero`] if the derivative is exactly zero at an
///   iterate
/// * [`MathError::ConvergenceFailed`] if the iteration cap is exhausted
///
/// # Example
///
/// ```rust
/// use polyroot_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let fdf = |x: f64| (x * x - 2.0, 2.0 * x);
///
/// let result = newton_raphson(fdf, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F>(
    fdf: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> (f64, f64),
{
    let mut x = initial_guess;
    let mut last_step = f64::INFINITY;

    for iteration in 0..config.max_iterations {
        let (fx, dfx) = fdf(x);

        // Flat tangent: no Newton step exists
        if dfx == 0.0 {
            return Err(MathError::DivisionByZero { x });
        }

        let next = x - fx / dfx;
        last_step = (next - x).abs();

        if last_step < config.tolerance {
            return Ok(SolverResult {
                root: next,
                iterations: iteration + 1,
                residual: fdf(next).0,
            });
        }

        x = next;
    }

    Err(MathError::convergence_failed(config.max_iterations, last_step))
}
