//! Telemetry module
//!
//! Console logging is the only observability surface; skip diagnostics and
//! per-file progress go through `tracing` while the final result lines stay
//! on plain stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TelemetryConfig;

/// Initialize the logging stack
///
/// The configured level is only a default; a `RUST_LOG` environment filter
/// takes precedence when set.
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to init logging: {}", e))?;

    Ok(())
}
