//! Tracestate limits and error definitions.

use thiserror::Error;

/// Maximum number of list members a tracestate holds.
pub const MAX_ENTRIES: usize = 32;

/// Errors raised when mutating a tracestate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TracestateError {
    /// Key does not match the simple or tenant-scoped key grammar.
    #[error("invalid tracestate key: {0:?}")]
    InvalidKey(String),

    /// Value is empty, too long, or contains a forbidden character.
    #[error("invalid tracestate value for key {key:?}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Result type for tracestate mutations.
pub type TracestateResult<T> = Result<T, TracestateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TracestateError::InvalidKey("_123".into());
        assert_eq!(err.to_string(), "invalid tracestate key: \"_123\"");

        let err = TracestateError::InvalidValue {
            key: "vendor".into(),
            value: "a,b".into(),
        };
        assert!(err.to_string().contains("vendor"));
        assert!(err.to_string().contains("a,b"));
    }
}
