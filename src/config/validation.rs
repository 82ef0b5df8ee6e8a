// Configuration validation
//
// Validates that required fields are present and values are sensible

use super::*;
use anyhow::{bail, Result};
use tracing::warn;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

pub fn validate_config(config: &ConvertConfig) -> Result<()> {
    validate_input_config(&config.input)?;
    validate_output_config(&config.output)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_input_config(config: &InputConfig) -> Result<()> {
    if config.path.trim().is_empty() {
        bail!("input.path cannot be empty");
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<()> {
    if config.root.trim().is_empty() {
        bail!("output.root cannot be empty");
    }

    if config.app.trim().is_empty() {
        bail!("output.app cannot be empty");
    }

    if config.file_name.is_empty() {
        bail!("output.file_name cannot be empty");
    }

    if config.file_name.contains('/') || config.file_name.contains('\\') {
        bail!(
            "output.file_name must be a bare file name, got '{}'",
            config.file_name
        );
    }

    if config.parquet_row_group_size == 0 {
        bail!("output.parquet_row_group_size must be greater than 0");
    }

    if config.parquet_row_group_size > 10_000_000 {
        warn!(
            parquet_row_group_size = config.parquet_row_group_size,
            "output.parquet_row_group_size is very large; readers may buffer whole files"
        );
    }

    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    let level = config.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        bail!(
            "logging.level must be one of {}, got '{}'",
            LOG_LEVELS.join(", "),
            config.level
        );
    }

    Ok(())
}
