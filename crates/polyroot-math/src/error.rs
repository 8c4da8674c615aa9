//! Error types for root-finding operations.
//!
//! Only the single-guess solver and configuration validation produce these.
//! The multi-guess locator and the extractor fold them into `Option` and
//! [`Termination`](crate::roots::Termination) values.

use thiserror::Error;

/// A specialized Result type for root-finding operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root-finding operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Newton-Raphson failed to converge within the iteration cap.
    #[error("Convergence failed after {iterations} iterations (last step: {last_step:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Size of the final Newton step.
        last_step: f64,
    },

    /// The derivative vanished at the current estimate.
    #[error("Degenerate derivative at x = {x}")]
    DivisionByZero {
        /// The estimate where the tangent is flat.
        x: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, last_step: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            last_step,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));

        let err = MathError::DivisionByZero { x: 0.0 };
        assert_eq!(err.to_string(), "Degenerate derivative at x = 0");

        let err = MathError::invalid_input("empty guess set");
        assert_eq!(err.to_string(), "Invalid input: empty guess set");
    }
}
