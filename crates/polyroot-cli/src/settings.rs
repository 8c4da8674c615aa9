//! Settings file handling.
//!
//! Settings live in a TOML file. A missing file means defaults; any key may
//! be omitted.
//!
//! ```toml
//! format = "table"
//!
//! [extraction]
//! guesses = [0.0, 1.0, -1.0, 2.0, -2.0, 3.0, -3.0]
//! precision = 8
//! duplicate_tolerance = 1e-6
//!
//! [extraction.solver]
//! tolerance = 1e-10
//! max_iterations = 100
//! ```

use std::path::{Path, PathBuf};

use polyroot_math::roots::ExtractionConfig;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Persistent CLI settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output format used when `--format` is not given.
    pub format: OutputFormat,
    /// Extraction defaults.
    pub extraction: ExtractionConfig,
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| match e {
            CliError::Config(reason) => CliError::Config(format!("{}: {}", path.display(), reason)),
            other => other,
        })
    }

    /// Parses and validates settings from TOML text.
    pub fn parse(content: &str) -> CliResult<Self> {
        let settings: Self =
            toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))?;
        settings.extraction.validate()?;
        Ok(settings)
    }

    /// Writes settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CliError::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Returns the settings path: the explicit one if given, else the user config dir.
pub fn resolve_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".to_string()))?;
    Ok(base.join("polyroot").join("config.toml"))
}
