//! Multi-guess root location.

use log::trace;

use crate::polynomial::Polynomial;
use crate::solvers::{newton_raphson, GuessSet, SolverConfig, SolverResult};

/// Runs Newton-Raphson from each guess in turn and returns the first root.
///
/// A guess is abandoned when the derivative vanishes at an iterate or when
/// `config.max_iterations` steps pass without convergence; the next guess is
/// then tried. Returns `None` when every guess is abandoned.
pub fn locate_root(
    polynomial: &Polynomial,
    guesses: &GuessSet,
    config: &SolverConfig,
) -> Option<SolverResult> {
    for guess in guesses.iter() {
        match newton_raphson(|x| polynomial.evaluate(x), guess, config) {
            Ok(result) => {
                trace!(
                    "guess {} converged to {} in {} iterations",
                    guess,
                    result.root,
                    result.iterations
                );
                return Some(result);
            }
            Err(err) => trace!("abandoning guess {}: {}", guess, err),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_guess_wins() {
        let p = Polynomial::from(vec![1.0, -6.0, 11.0, -6.0]);

        let result = locate_root(&p, &GuessSet::default(), &SolverConfig::default()).unwrap();

        // Newton from 0 on this cubic lands on the smallest root
        assert_relative_eq!(result.root, 1.0, epsilon = 1e-9);
        assert!(result.residual.abs() < 1e-9);
    }

    #[test]
    fn test_falls_through_flat_tangent() {
        let p = Polynomial::from(vec![1.0, 0.0, -1.0]);
        let guesses = GuessSet::new(vec![0.0, 2.0]);

        let result = locate_root(&p, &guesses, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_guess_order_decides_root() {
        let p = Polynomial::from(vec![1.0, 0.0, -1.0]);
        let config = SolverConfig::default();

        let left = locate_root(&p, &GuessSet::new(vec![-2.0, 2.0]), &config).unwrap();
        let right = locate_root(&p, &GuessSet::new(vec![2.0, -2.0]), &config).unwrap();

        assert_relative_eq!(left.root, -1.0, epsilon = 1e-10);
        assert_relative_eq!(right.root, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_no_real_root() {
        // x^2 + 1
        let p = Polynomial::from(vec![1.0, 0.0, 1.0]);

        assert!(locate_root(&p, &GuessSet::default(), &SolverConfig::default()).is_none());
    }

    #[test]
    fn test_empty_guess_set() {
        let p = Polynomial::from(vec![1.0, -1.0]);

        assert!(locate_root(&p, &GuessSet::new(Vec::new()), &SolverConfig::default()).is_none());
    }
}
