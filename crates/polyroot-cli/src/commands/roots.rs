//! Roots command implementation.
//!
//! Extracts every real root the solver can isolate.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use polyroot_math::roots::{Extraction, RootExtractor, Termination};
use polyroot_math::Polynomial;

use crate::cli::OutputFormat;
use crate::commands::{parse_coefficients, Context, SolverArgs};
use crate::output::{
    format_residual, format_value, print_header, print_info, print_json, print_rows,
    print_warning,
};

/// Arguments for the roots command.
#[derive(Args, Debug)]
pub struct RootsArgs {
    /// Coefficients, highest degree first (e.g. `1 -6 11 -6` or `1,-6,11,-6`)
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub coefficients: Vec<String>,

    /// Sort roots ascending instead of discovery order
    #[arg(long)]
    pub sorted: bool,

    #[command(flatten)]
    pub solver: SolverArgs,
}

/// One row of the roots table.
#[derive(Debug, Serialize, Tabled)]
pub struct RootRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Root")]
    pub root: String,
    #[tabled(rename = "P(root)")]
    pub residual: String,
}

/// Machine-readable extraction result.
#[derive(Debug, Serialize)]
pub struct RootsReport {
    pub polynomial: String,
    pub coefficients: Vec<f64>,
    pub roots: Vec<f64>,
    pub termination: Termination,
    pub complete: bool,
}

impl RootsReport {
    /// Builds a report for `polynomial` from its extraction.
    pub fn new(polynomial: &Polynomial, extraction: Extraction, sorted: bool) -> Self {
        let complete = extraction.is_complete();
        let mut roots = extraction.roots;
        if sorted {
            roots.sort_by(f64::total_cmp);
        }
        Self {
            polynomial: polynomial.to_string(),
            coefficients: polynomial.coefficients().to_vec(),
            roots,
            termination: extraction.termination,
            complete,
        }
    }

    /// Table rows with the residual of the original polynomial at each root.
    pub fn rows(&self, precision: usize) -> Vec<RootRow> {
        let polynomial = Polynomial::from(self.coefficients.as_slice());
        self.roots
            .iter()
            .enumerate()
            .map(|(i, &root)| RootRow {
                index: i + 1,
                root: format_value(root, precision),
                residual: format_residual(polynomial.value_at(root)),
            })
            .collect()
    }
}

/// Prints a single report in the requested format.
pub fn print_report(report: &RootsReport, ctx: &Context, precision: usize) -> Result<()> {
    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!("Roots of {}", report.polynomial));
            }
            print_rows(&report.rows(precision), ctx.format)?;
            if !ctx.quiet {
                print_status(report);
            }
        }
        OutputFormat::Csv => print_rows(&report.rows(precision), ctx.format)?,
        OutputFormat::Json => print_json(report)?,
        OutputFormat::Minimal => println!("{}", serde_json::to_string(&report.roots)?),
    }
    Ok(())
}

fn print_status(report: &RootsReport) {
    let degree = report.coefficients.len().saturating_sub(1);
    match report.termination {
        Termination::Complete => {
            print_info(&format!("All {} roots found", report.roots.len()));
        }
        other => print_warning(&format!(
            "Stopped early ({}): {} of {} roots found",
            other,
            report.roots.len(),
            degree
        )),
    }
}

/// Execute the roots command.
pub fn execute(args: RootsArgs, ctx: &Context) -> Result<()> {
    let polynomial = parse_coefficients(&args.coefficients)?;
    let config = args.solver.apply(&ctx.extraction)?;
    let precision = config.precision as usize;

    info!(polynomial = %polynomial, degree = polynomial.degree(), "extracting roots");

    let extraction = RootExtractor::new(config).extract(&polynomial);

    info!(
        found = extraction.roots.len(),
        termination = %extraction.termination,
        "extraction finished"
    );

    let report = RootsReport::new(&polynomial, extraction, args.sorted);
    print_report(&report, ctx, precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_rows() {
        let polynomial = Polynomial::from(vec![1.0, -3.0, 2.0]);
        let extraction = RootExtractor::default().extract(&polynomial);
        let report = RootsReport::new(&polynomial, extraction, true);

        assert_eq!(report.roots, vec![1.0, 2.0]);
        assert!(report.complete);

        let rows = report.rows(4);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].root, "1.0000");
        assert_eq!(rows[1].index, 2);
        assert_eq!(rows[1].residual, "0.00e0");
    }

    #[test]
    fn test_report_json_shape() {
        let polynomial = Polynomial::from(vec![1.0, 0.0, 1.0]);
        let extraction = RootExtractor::default().extract(&polynomial);
        let report = RootsReport::new(&polynomial, extraction, false);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["polynomial"], "x^2 + 1");
        assert_eq!(json["termination"], "no_convergence");
        assert_eq!(json["complete"], false);
        assert!(json["roots"].as_array().unwrap().is_empty());
    }
}
