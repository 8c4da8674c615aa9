//! Config command implementation.
//!
//! Manages the TOML settings file.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

use polyroot_math::solvers::GuessSet;

use crate::cli::OutputFormat;
use crate::commands::parse_number;
use crate::error::CliError;
use crate::output::{
    print_header, print_info, print_json, print_rows, print_success, print_warning, KeyValue,
};
use crate::settings::Settings;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective settings
    Show,

    /// Set a single value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Write a settings file containing the defaults
    Init(InitArgs),

    /// Delete the settings file so defaults apply
    Reset,

    /// Show settings file location
    Path,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Settings keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    Format,
    /// Newton step-size tolerance
    Tolerance,
    /// Iteration cap per guess
    MaxIterations,
    /// Starting guesses
    Guesses,
    /// Decimal places kept per root
    Precision,
    /// Duplicate-root distance
    DuplicateTolerance,
}

impl ConfigKey {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "format" => Some(Self::Format),
            "tolerance" => Some(Self::Tolerance),
            "max_iterations" => Some(Self::MaxIterations),
            "guesses" => Some(Self::Guesses),
            "precision" => Some(Self::Precision),
            "duplicate_tolerance" => Some(Self::DuplicateTolerance),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Tolerance => "tolerance",
            Self::MaxIterations => "max_iterations",
            Self::Guesses => "guesses",
            Self::Precision => "precision",
            Self::DuplicateTolerance => "duplicate_tolerance",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Format => "Default output format (table, json, csv, minimal)",
            Self::Tolerance => "Newton step-size tolerance",
            Self::MaxIterations => "Iteration cap per starting guess",
            Self::Guesses => "Comma-separated starting guesses, tried in order",
            Self::Precision => "Decimal places kept for each root (0-15)",
            Self::DuplicateTolerance => "Distance under which two roots count as the same",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Format,
            Self::Tolerance,
            Self::MaxIterations,
            Self::Guesses,
            Self::Precision,
            Self::DuplicateTolerance,
        ]
    }

    fn read(self, settings: &Settings) -> String {
        let extraction = &settings.extraction;
        match self {
            Self::Format => settings.format.as_str().to_string(),
            Self::Tolerance => extraction.solver.tolerance.to_string(),
            Self::MaxIterations => extraction.solver.max_iterations.to_string(),
            Self::Guesses => join_guesses(&extraction.guesses),
            Self::Precision => extraction.precision.to_string(),
            Self::DuplicateTolerance => extraction.duplicate_tolerance.to_string(),
        }
    }

    fn write(self, settings: &mut Settings, value: &str) -> Result<()> {
        let extraction = &mut settings.extraction;
        match self {
            Self::Format => {
                settings.format = OutputFormat::from_str(value, true).map_err(|_| {
                    anyhow::anyhow!("Invalid format: {}. Use table, json, csv, or minimal.", value)
                })?;
            }
            Self::Tolerance => extraction.solver.tolerance = parse_number(value)?,
            Self::MaxIterations => {
                extraction.solver.max_iterations = value
                    .trim()
                    .parse()
                    .map_err(|_| CliError::InvalidNumber(value.to_string()))?;
            }
            Self::Guesses => {
                let guesses = value
                    .split(',')
                    .filter(|piece| !piece.trim().is_empty())
                    .map(parse_number)
                    .collect::<Result<Vec<_>, _>>()?;
                extraction.guesses = GuessSet::new(guesses);
            }
            Self::Precision => {
                extraction.precision = value
                    .trim()
                    .parse()
                    .map_err(|_| CliError::InvalidNumber(value.to_string()))?;
            }
            Self::DuplicateTolerance => extraction.duplicate_tolerance = parse_number(value)?,
        }
        Ok(())
    }
}

fn join_guesses(guesses: &GuessSet) -> String {
    guesses
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, path: &Path, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(path, format),
        ConfigCommand::Set(set_args) => execute_set(set_args, path),
        ConfigCommand::List => execute_list(format),
        ConfigCommand::Init(init_args) => execute_init(init_args, path),
        ConfigCommand::Reset => execute_reset(path),
        ConfigCommand::Path => execute_path(path),
    }
}

/// Show effective configuration.
fn execute_show(path: &Path, format: OutputFormat) -> Result<()> {
    let settings = Settings::load(path)?;

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            let results: Vec<KeyValue> = ConfigKey::all()
                .iter()
                .map(|key| KeyValue::new(key.as_str(), key.read(&settings)))
                .collect();
            if format == OutputFormat::Table {
                print_header("Current Configuration");
            }
            print_rows(&results, format)?;
        }
        OutputFormat::Json => print_json(&settings)?,
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}={}", key.as_str(), key.read(&settings));
            }
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: SetArgs, path: &Path) -> Result<()> {
    let key =
        ConfigKey::parse(&args.key).ok_or_else(|| CliError::UnknownKey(args.key.clone()))?;

    let mut settings = Settings::load(path)?;
    key.write(&mut settings, &args.value)?;
    settings.extraction.validate().map_err(CliError::from)?;
    settings.save(path)?;

    print_success(&format!("Set {} = {}", key.as_str(), key.read(&settings)));
    Ok(())
}

/// List available configuration keys.
fn execute_list(format: OutputFormat) -> Result<()> {
    let defaults = Settings::default();

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.read(&defaults)
                    })
                })
                .collect();
            print_json(&output)?;
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key.as_str());
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let results: Vec<KeyValue> = ConfigKey::all()
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", key.description(), key.read(&defaults)),
                    )
                })
                .collect();
            if format == OutputFormat::Table {
                print_header("Available Configuration Keys");
            }
            print_rows(&results, format)?;
        }
    }

    Ok(())
}

/// Write the default settings file.
fn execute_init(args: InitArgs, path: &Path) -> Result<()> {
    if path.exists() && !args.force {
        print_warning(&format!(
            "{} already exists; use --force to overwrite",
            path.display()
        ));
        return Ok(());
    }

    Settings::default().save(path)?;
    print_success(&format!("Wrote default settings to {}", path.display()));
    Ok(())
}

/// Delete the settings file.
fn execute_reset(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
        print_success("Reset all configuration to defaults");
    } else {
        print_info("No settings file; defaults already apply");
    }
    Ok(())
}

/// Show configuration file path.
fn execute_path(path: &Path) -> Result<()> {
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_aliases() {
        assert_eq!(ConfigKey::parse("max-iterations"), Some(ConfigKey::MaxIterations));
        assert_eq!(ConfigKey::parse("PRECISION"), Some(ConfigKey::Precision));
        assert_eq!(ConfigKey::parse("colour"), None);
    }

    #[test]
    fn test_write_then_read() {
        let mut settings = Settings::default();

        ConfigKey::Guesses.write(&mut settings, "-1, 0.5,2").unwrap();
        ConfigKey::Format.write(&mut settings, "JSON").unwrap();
        ConfigKey::MaxIterations.write(&mut settings, "42").unwrap();

        assert_eq!(ConfigKey::Guesses.read(&settings), "-1,0.5,2");
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.extraction.solver.max_iterations, 42);
    }

    #[test]
    fn test_write_rejects_bad_values() {
        let mut settings = Settings::default();

        assert!(ConfigKey::Precision.write(&mut settings, "-3").is_err());
        assert!(ConfigKey::Tolerance.write(&mut settings, "tiny").is_err());
        assert!(ConfigKey::Format.write(&mut settings, "yaml").is_err());
    }
}
