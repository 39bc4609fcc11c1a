//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TctxConfig {
    /// Defaults for newly made traceparents.
    pub traceparent: TraceparentConfig,

    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Traceparent defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TraceparentConfig {
    /// Whether new root traces are sampled unless told otherwise.
    pub sampled: bool,
}

impl Default for TraceparentConfig {
    fn default() -> Self {
        Self { sampled: true }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directives (e.g. "warn", "tctx=debug"). `RUST_LOG` wins if set.
    pub level: String,

    /// One of "compact", "pretty", "json".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
        }
    }
}
