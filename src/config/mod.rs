// Conversion configuration
//
// The binary always runs with `ConvertConfig::default()`: fixed input file,
// fixed output tree, info-level text logs. Library callers can construct a
// config in code or parse one from TOML to point a run somewhere else.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod validation;

/// Main conversion configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Source CSV location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: "swiggy_scraped.csv".to_string(),
        }
    }
}

/// Partitioned output layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives the `app=<app>/dt=<date>` tree
    pub root: String,
    pub app: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default = "default_parquet_row_group_size")]
    pub parquet_row_group_size: usize,
}

fn default_file_name() -> String {
    swiggy2parquet_core::PARTITION_FILE_NAME.to_string()
}

fn default_parquet_row_group_size() -> usize {
    32 * 1024
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: "data/clean".to_string(),
            app: "swiggy".to_string(),
            file_name: default_file_name(),
            parquet_row_group_size: default_parquet_row_group_size(),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl ConvertConfig {
    /// Parse a TOML document; missing sections fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ConvertConfig =
            toml::from_str(content).context("Failed to parse conversion config")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    pub fn input_path(&self) -> &Path {
        Path::new(&self.input.path)
    }

    pub fn output_root(&self) -> PathBuf {
        PathBuf::from(&self.output.root)
    }
}
