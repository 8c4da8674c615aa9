//! CLI command implementations.

pub mod config;
pub mod deflate;
pub mod demo;
pub mod eval;
pub mod roots;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use deflate::DeflateArgs;
pub use demo::DemoArgs;
pub use eval::EvalArgs;
pub use roots::RootsArgs;

use clap::Args;
use polyroot_math::roots::ExtractionConfig;
use polyroot_math::solvers::GuessSet;
use polyroot_math::Polynomial;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Resolved settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and status lines.
    pub quiet: bool,
    /// Extraction defaults from the settings file.
    pub extraction: ExtractionConfig,
}

/// Per-invocation overrides of the extraction settings.
#[derive(Args, Debug, Default)]
pub struct SolverArgs {
    /// Newton step-size tolerance
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Iteration cap per starting guess
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Starting guesses in priority order, comma-separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, value_parser = parse_number)]
    pub guesses: Option<Vec<f64>>,

    /// Decimal places kept for each root
    #[arg(long)]
    pub precision: Option<u32>,

    /// Distance under which two roots count as the same
    #[arg(long)]
    pub duplicate_tolerance: Option<f64>,
}

impl SolverArgs {
    /// Applies the overrides to `base` and validates the result.
    pub fn apply(&self, base: &ExtractionConfig) -> CliResult<ExtractionConfig> {
        let mut config = base.clone();
        if let Some(tolerance) = self.tolerance {
            config.solver.tolerance = tolerance;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.solver.max_iterations = max_iterations;
        }
        if let Some(ref guesses) = self.guesses {
            config.guesses = GuessSet::new(guesses.clone());
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        if let Some(tolerance) = self.duplicate_tolerance {
            config.duplicate_tolerance = tolerance;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Parses a single finite number.
pub fn parse_number(s: &str) -> CliResult<f64> {
    let trimmed = s.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CliError::InvalidNumber(trimmed.to_string())),
    }
}

/// Parses coefficient tokens, each of which may hold comma-separated values.
///
/// Integer and decimal forms are both accepted and normalised to `f64`.
pub fn parse_coefficients(tokens: &[String]) -> CliResult<Polynomial> {
    let coefficients = tokens
        .iter()
        .flat_map(|token| token.split(','))
        .filter(|piece| !piece.trim().is_empty())
        .map(parse_number)
        .collect::<CliResult<Vec<f64>>>()?;

    if coefficients.is_empty() {
        return Err(CliError::NoCoefficients);
    }
    Ok(Polynomial::new(coefficients))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_coefficients_mixed_forms() {
        let p = parse_coefficients(&tokens(&["1", "-6,11", " -6.0 "])).unwrap();
        assert_eq!(p.coefficients(), &[1.0, -6.0, 11.0, -6.0]);
    }

    #[test]
    fn test_parse_coefficients_rejects_garbage() {
        let err = parse_coefficients(&tokens(&["1", "abc"])).unwrap_err();
        assert!(matches!(err, CliError::InvalidNumber(ref s) if s == "abc"));

        assert!(matches!(
            parse_coefficients(&tokens(&["1", "inf"])),
            Err(CliError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_coefficients(&tokens(&[",", " "])),
            Err(CliError::NoCoefficients)
        ));
    }

    #[test]
    fn test_solver_args_override() {
        let args = SolverArgs {
            tolerance: Some(1e-6),
            guesses: Some(vec![4.0, -4.0]),
            precision: Some(3),
            ..Default::default()
        };

        let config = args.apply(&ExtractionConfig::default()).unwrap();

        assert_eq!(config.solver.tolerance, 1e-6);
        assert_eq!(config.solver.max_iterations, 100);
        assert_eq!(config.guesses.as_slice(), &[4.0, -4.0]);
        assert_eq!(config.precision, 3);
    }

    #[test]
    fn test_solver_args_validation() {
        let args = SolverArgs {
            max_iterations: Some(0),
            ..Default::default()
        };

        assert!(matches!(
            args.apply(&ExtractionConfig::default()),
            Err(CliError::Math(_))
        ));
    }
}
