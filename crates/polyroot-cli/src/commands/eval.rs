//! Eval command implementation.
//!
//! Evaluates a polynomial and its derivative at one point.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{parse_coefficients, parse_number, Context};
use crate::output::{print_header, print_json, print_rows, KeyValue};

/// Arguments for the eval command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Coefficients, highest degree first
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub coefficients: Vec<String>,

    /// Point at which to evaluate
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_number)]
    pub at: f64,
}

/// Evaluation result.
#[derive(Debug, Serialize)]
pub struct EvalResult {
    pub polynomial: String,
    pub x: f64,
    pub value: f64,
    pub derivative: f64,
}

/// Execute the eval command.
pub fn execute(args: EvalArgs, ctx: &Context) -> Result<()> {
    let polynomial = parse_coefficients(&args.coefficients)?;
    let (value, derivative) = polynomial.evaluate(args.at);

    let result = EvalResult {
        polynomial: polynomial.to_string(),
        x: args.at,
        value,
        derivative,
    };

    match ctx.format {
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Polynomial", result.polynomial.clone()),
                KeyValue::new("x", result.x.to_string()),
                KeyValue::new("P(x)", result.value.to_string()),
                KeyValue::new("P'(x)", result.derivative.to_string()),
            ];
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header("Evaluation");
            }
            print_rows(&rows, ctx.format)?;
        }
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Minimal => println!("{} {}", result.value, result.derivative),
    }

    Ok(())
}
