use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::form::DEFAULT_MIN_YEAR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Result card for the terminal
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Birth date used when none is given on the command line (YYYY-MM-DD)
    pub birth_date: Option<String>,

    /// Output format when `--format` is not given
    pub format: OutputFormat,

    /// Earliest accepted birth year
    pub min_year: i32,

    /// Directory the SVG cards are written to when `--svg` is not given
    pub svg_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            birth_date: None,
            format: OutputFormat::default(),
            min_year: DEFAULT_MIN_YEAR,
            svg_dir: None,
        }
    }
}

/// Values given on the command line; each one set wins over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub birth_date: Option<String>,
    pub format: Option<OutputFormat>,
    pub svg_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Default config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("agecalc").join("config.toml"))
    }

    /// Load config from `path`, or from the default location.
    ///
    /// An explicitly given file must exist and parse. The default file is
    /// optional: when it is missing or broken the defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            return Self::from_toml(&content)
                .with_context(|| format!("Failed to parse config {}", path.display()));
        }

        let Some(path) = Self::config_path() else {
            tracing::debug!("No config directory, using defaults");
            return Ok(AppConfig::default());
        };

        if !path.exists() {
            return Ok(AppConfig::default());
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    return Ok(config);
                }
                Err(e) => tracing::warn!("Failed to parse config: {}", e),
            },
            Err(e) => tracing::warn!("Failed to read config: {}", e),
        }

        Ok(AppConfig::default())
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn merge(self, overrides: Overrides) -> Self {
        Self {
            birth_date: overrides.birth_date.or(self.birth_date),
            format: overrides.format.unwrap_or(self.format),
            svg_dir: overrides.svg_dir.or(self.svg_dir),
            ..self
        }
    }
}
