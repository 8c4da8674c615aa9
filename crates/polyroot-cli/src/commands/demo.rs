//! Demo command implementation.
//!
//! Solves a fixed set of sample polynomials, including one with a repeated
//! root that collapses to its distinct values.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use polyroot_math::roots::RootExtractor;
use polyroot_math::Polynomial;

use crate::cli::OutputFormat;
use crate::commands::roots::{print_report, RootsReport};
use crate::commands::{Context, SolverArgs};
use crate::output::{format_value, print_json, print_rows};

/// Sample polynomials, highest degree first.
pub const SAMPLES: [&[i32]; 3] = [
    // (x - 1)(x - 2)(x - 3)
    &[1, -6, 11, -6],
    // (x + 1)^2 (x - 1)
    &[1, 1, -1, -1],
    // (x - 1)(x + 1)(x - 3)(x + 3)
    &[1, 0, -10, 0, 9],
];

/// Arguments for the demo command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    #[command(flatten)]
    pub solver: SolverArgs,
}

/// Flat CSV row across all samples.
#[derive(Debug, Serialize, Tabled)]
struct DemoRow {
    polynomial: String,
    root: String,
}

/// Execute the demo command.
pub fn execute(args: DemoArgs, ctx: &Context) -> Result<()> {
    let config = args.solver.apply(&ctx.extraction)?;
    let precision = config.precision as usize;
    let extractor = RootExtractor::new(config);

    let reports: Vec<RootsReport> = SAMPLES
        .iter()
        .map(|&coefficients| {
            let polynomial = Polynomial::from(coefficients);
            let extraction = extractor.extract(&polynomial);
            RootsReport::new(&polynomial, extraction, false)
        })
        .collect();

    match ctx.format {
        OutputFormat::Table => {
            for report in &reports {
                print_report(report, ctx, precision)?;
            }
        }
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Csv => {
            let rows: Vec<DemoRow> = reports
                .iter()
                .flat_map(|report| {
                    report.roots.iter().map(|&root| DemoRow {
                        polynomial: report.polynomial.clone(),
                        root: format_value(root, precision),
                    })
                })
                .collect();
            print_rows(&rows, ctx.format)?;
        }
        OutputFormat::Minimal => {
            for report in &reports {
                println!("{}", serde_json::to_string(&report.roots)?);
            }
        }
    }

    Ok(())
}
