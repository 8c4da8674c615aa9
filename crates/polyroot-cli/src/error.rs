//! CLI error types.

use polyroot_math::MathError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A value could not be read as a finite number.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// No coefficients were supplied.
    #[error("No coefficients given. Pass them highest degree first, e.g. `1 -6 11 -6`.")]
    NoCoefficients,

    /// Unknown settings key.
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Settings file error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Solver settings rejected by the math crate.
    #[error(transparent)]
    Math(#[from] MathError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
