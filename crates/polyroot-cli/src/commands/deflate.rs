//! Deflate command implementation.
//!
//! Divides a polynomial by `(x - root)` using synthetic division.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::commands::{parse_coefficients, parse_number, Context};
use crate::output::{format_residual, print_header, print_json, print_rows, KeyValue};

/// Arguments for the deflate command.
#[derive(Args, Debug)]
pub struct DeflateArgs {
    /// Coefficients, highest degree first
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub coefficients: Vec<String>,

    /// Root to divide out
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_number)]
    pub root: f64,
}

/// Deflation result.
#[derive(Debug, Serialize)]
pub struct DeflateResult {
    pub quotient: Vec<f64>,
    pub remainder: f64,
}

/// Execute the deflate command.
pub fn execute(args: DeflateArgs, ctx: &Context) -> Result<()> {
    let polynomial = parse_coefficients(&args.coefficients)?;
    let (quotient, remainder) = polynomial.synthetic_division(args.root);

    if remainder.abs() > ctx.extraction.duplicate_tolerance {
        warn!(root = args.root, remainder, "deflating by a value that is not a root");
    }

    match ctx.format {
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Polynomial", polynomial.to_string()),
                KeyValue::new("Divisor", format!("x - ({})", args.root)),
                KeyValue::new("Quotient", quotient.to_string()),
                KeyValue::new("Remainder", format_residual(remainder)),
            ];
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header("Synthetic Division");
            }
            print_rows(&rows, ctx.format)?;
        }
        OutputFormat::Json => print_json(&DeflateResult {
            quotient: quotient.into_coefficients(),
            remainder,
        })?,
        OutputFormat::Minimal => {
            println!("{}", serde_json::to_string(quotient.coefficients())?);
        }
    }

    Ok(())
}
