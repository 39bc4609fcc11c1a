//! Structured logging.
//!
//! # Responsibilities
//! - Install the global `tracing` subscriber for the binary
//! - Pick the output format from config
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured filter
//! - Logs go to stderr so stdout stays machine-readable

use thiserror::Error;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
#[error("failed to install log subscriber: {0}")]
pub struct LoggingError(#[from] TryInitError);

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        "pretty" => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()?,
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
