//! The locate/deflate loop.

use log::debug;

use crate::polynomial::Polynomial;
use crate::roots::{round_to, Extraction, ExtractionConfig, Termination};
use crate::solvers::{NewtonLocator, RootLocator};

/// Recovers the real roots of a polynomial one at a time.
///
/// # Example
///
/// ```rust
/// use polyroot_math::roots::{ExtractionConfig, RootExtractor, Termination};
/// use polyroot_math::Polynomial;
///
/// // x^3 - 2 has a single real root
/// let extractor = RootExtractor::new(ExtractionConfig::default());
/// let result = extractor.extract(&Polynomial::from(vec![1.0, 0.0, 0.0, -2.0]));
///
/// assert_eq!(result.roots, vec![1.25992105]);
/// assert_eq!(result.termination, Termination::NoConvergence);
/// ```
#[derive(Debug, Clone)]
pub struct RootExtractor<L = NewtonLocator> {
    locator: L,
    config: ExtractionConfig,
}

impl Default for RootExtractor<NewtonLocator> {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

impl RootExtractor<NewtonLocator> {
    /// Creates an extractor using Newton-Raphson.
    #[must_use]
    pub fn new(config: ExtractionConfig) -> Self {
        Self::with_locator(NewtonLocator, config)
    }
}

impl<L: RootLocator> RootExtractor<L> {
    /// Creates an extractor with a custom locator.
    #[must_use]
    pub fn with_locator(locator: L, config: ExtractionConfig) -> Self {
        Self { locator, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extracts roots until the polynomial is constant or the search stalls.
    ///
    /// Recorded roots are rounded to `config.precision` decimals, but the
    /// deflation uses the unrounded value so the quotient stays accurate.
    pub fn extract(&self, polynomial: &Polynomial) -> Extraction {
        let config = &self.config;
        let mut remaining = polynomial.clone();
        let mut degree = remaining.degree();
        let mut roots: Vec<f64> = Vec::with_capacity(degree);

        debug!(
            "extracting roots of degree {} polynomial with {}",
            degree,
            self.locator.name()
        );

        let termination = loop {
            if degree == 0 {
                break Termination::Complete;
            }

            let Some(found) = self
                .locator
                .locate(&remaining, &config.guesses, &config.solver)
            else {
                debug!("no guess converged at degree {}", degree);
                break Termination::NoConvergence;
            };

            let rounded = round_to(found.root, config.precision);
            if roots
                .iter()
                .any(|&existing| (rounded - existing).abs() < config.duplicate_tolerance)
            {
                debug!("root {} found again at degree {}", rounded, degree);
                break Termination::DuplicateRoot;
            }

            debug!(
                "root {} after {} iterations (residual {:.2e})",
                rounded, found.iterations, found.residual
            );
            roots.push(rounded);
            remaining = remaining.deflate(found.root);
            degree -= 1;
        };

        Extraction {
            roots,
            termination,
            remaining,
        }
    }
}
