//! Configuration validation.
//!
//! Returns every problem found, not just the first.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::TctxConfig;

/// Log formats the logging subsystem knows how to install.
pub const LOG_FORMATS: &[&str] = &["compact", "pretty", "json"];

/// A semantic problem with an otherwise well-formed config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("logging.level {level:?} is not a valid filter: {reason}")]
    InvalidLogLevel { level: String, reason: String },

    #[error("logging.format {0:?} is not one of compact, pretty, json")]
    UnknownLogFormat(String),
}

/// Check a deserialized config.
pub fn validate_config(config: &TctxConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = EnvFilter::try_new(&config.logging.level) {
        errors.push(ValidationError::InvalidLogLevel {
            level: config.logging.level.clone(),
            reason: e.to_string(),
        });
    }

    if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
        errors.push(ValidationError::UnknownLogFormat(config.logging.format.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
