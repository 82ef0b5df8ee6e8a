// Logging/tracing setup

use crate::config::{ConvertConfig, LogFormat};

/// Initialize tracing/logging from ConvertConfig
pub fn init_tracing(config: &ConvertConfig) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    // Try to set the global subscriber; ignore error if already set (idempotent)
    let _ = match config.logging.format {
        LogFormat::Json => {
            tracing::subscriber::set_global_default(registry.with(fmt::layer().json()))
        }
        LogFormat::Text => tracing::subscriber::set_global_default(
            registry.with(fmt::layer().with_target(false)),
        ),
    };

    tracing::debug!(
        "Tracing initialized (level={}, format={})",
        config.logging.level,
        config.logging.format
    );
}
