//! Logging setup
//!
//! The library itself only emits `tracing` events; applications that want
//! them printed call [`init`] once at startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Result, SubtitleError};

/// Install a global subscriber. `RUST_LOG` overrides the configured level.
///
/// Fails with a configuration error when a subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| {
            SubtitleError::Config(format!("invalid log level {:?}: {}", config.level, e))
        })?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    installed.map_err(|e| SubtitleError::Config(format!("logging already initialized: {}", e)))
}
