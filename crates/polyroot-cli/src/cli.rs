//! CLI argument definitions.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{ConfigArgs, DeflateArgs, DemoArgs, EvalArgs, RootsArgs};

/// Polyroot - real roots of polynomials by Newton-Raphson and deflation
#[derive(Parser)]
#[command(name = "polyroot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the settings file, then table)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file path
    #[arg(long, env = "POLYROOT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Find all real roots of a polynomial
    Roots(RootsArgs),

    /// Evaluate a polynomial and its derivative at a point
    Eval(EvalArgs),

    /// Divide a polynomial by (x - root)
    Deflate(DeflateArgs),

    /// Solve the built-in sample polynomials
    Demo(DemoArgs),

    /// Manage the settings file
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}

impl OutputFormat {
    /// Lowercase name as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Minimal => "minimal",
        }
    }
}

/// Keeps comma-separated number lists such as `-1,0,4` out of flag parsing.
///
/// clap reads any token with a leading hyphen that is not a single number as
/// a flag. A leading space turns such a list into a plain value; the number
/// parsers trim it off again.
pub fn mark_number_lists<I>(args: I) -> impl Iterator<Item = OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter().map(|arg| {
        let marked = arg
            .to_str()
            .filter(|token| is_negative_number_list(token))
            .map(|token| OsString::from(format!(" {token}")));
        marked.unwrap_or(arg)
    })
}

fn is_negative_number_list(token: &str) -> bool {
    token.starts_with('-')
        && token.contains(',')
        && token
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .all(|piece| piece.parse::<f64>().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(mark_number_lists(args.iter().map(OsString::from))).unwrap()
    }

    #[test]
    fn test_number_lists_detected() {
        assert!(is_negative_number_list("-1,0,4"));
        assert!(is_negative_number_list("-6,11"));
        assert!(is_negative_number_list("-1.5e-3, 2,"));
        assert!(!is_negative_number_list("-1"));
        assert!(!is_negative_number_list("1,-2"));
        assert!(!is_negative_number_list("--format"));
        assert!(!is_negative_number_list("-f,json"));
    }

    #[test]
    fn test_leading_negative_list_with_trailing_flags() {
        let cli = parse(&[
            "polyroot", "roots", "-1,0,4", "--tolerance", "1e-12", "-f", "json",
        ]);

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Roots(args) => {
                assert_eq!(args.coefficients, vec![" -1,0,4".to_string()]);
                assert_eq!(args.solver.tolerance, Some(1e-12));
            }
            _ => panic!("expected roots"),
        }
    }

    #[test]
    fn test_negative_guess_list() {
        let cli = parse(&["polyroot", "roots", "1", "0", "-4", "--guesses", "-3,-1"]);

        match cli.command {
            Commands::Roots(args) => {
                assert_eq!(args.coefficients, vec!["1", "0", "-4"]);
                assert_eq!(args.solver.guesses, Some(vec![-3.0, -1.0]));
            }
            _ => panic!("expected roots"),
        }
    }
}
