//! Polyroot CLI - find the real roots of a polynomial from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Roots of x^3 - 6x^2 + 11x - 6
//! polyroot roots 1 -6 11 -6
//!
//! # Comma-separated coefficients work too
//! polyroot roots 1,0,-10,0,9 --format json
//!
//! # Evaluate P(x) and P'(x)
//! polyroot eval 1 0 -4 --at 3
//!
//! # Divide out a known root
//! polyroot deflate 1 -6 11 -6 --root 1
//!
//! # Run the sample polynomials
//! polyroot demo
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use commands::Context;
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse_from(cli::mark_number_lists(std::env::args_os()));

    init_logging(cli.verbose, cli.quiet);

    let settings_path = settings::resolve_path(cli.config.as_deref())?;
    let (format, quiet) = (cli.format, cli.quiet);

    let context = || -> Result<Context> {
        let settings = Settings::load(&settings_path)?;
        debug!(path = %settings_path.display(), "settings loaded");
        Ok(Context {
            format: format.unwrap_or(settings.format),
            quiet,
            extraction: settings.extraction,
        })
    };

    // Execute command
    match cli.command {
        Commands::Roots(args) => commands::roots::execute(args, &context()?)?,
        Commands::Eval(args) => commands::eval::execute(args, &context()?)?,
        Commands::Deflate(args) => commands::deflate::execute(args, &context()?)?,
        Commands::Demo(args) => commands::demo::execute(args, &context()?)?,
        // Manages the settings file itself, so a broken file must not block it
        Commands::Config(args) => {
            commands::config::execute(args, &settings_path, format.unwrap_or_default())?;
        }
    }

    Ok(())
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins over the verbosity flags. `log` records from the math
/// crate are bridged into tracing by the subscriber.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
