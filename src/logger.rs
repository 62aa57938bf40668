//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

use crate::config::settings::LoggerConfig;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level so operators can
/// raise verbosity without editing configuration files. Calling this twice
/// is an error; do it once at startup.
pub fn init_logger(config: &LoggerConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}
