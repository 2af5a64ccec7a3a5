//! Error types for the comention index
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Only recoverable conditions surface as `Err` values: configuration
//! problems and malformed annotation data. Caller contract violations
//! (querying an index for a field or language it was not configured for,
//! constructing a span with `start >= end` via [`Span::new`]) are bugs in
//! the integration and fail as assertions at the violating call instead.
//!
//! [`Span::new`]: crate::types::Span::new

use thiserror::Error;

/// Result type alias for comention operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the comention index
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Span offsets from annotation data do not form a valid range
    #[error("invalid span: start {start} >= end {end}")]
    InvalidSpan {
        /// Start offset of the rejected span
        start: u32,
        /// End offset of the rejected span
        end: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_config() {
        let err = Error::InvalidConfig("min_confidence must be within [0, 1]".to_string());
        let msg = err.to_string();
        assert!(msg.contains("invalid configuration"));
        assert!(msg.contains("min_confidence"));
    }

    #[test]
    fn test_error_display_invalid_span() {
        let err = Error::InvalidSpan { start: 12, end: 5 };
        let msg = err.to_string();
        assert!(msg.contains("invalid span"));
        assert!(msg.contains("12"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_result_type_alias() {
        fn ok() -> Result<u32> {
            Ok(7)
        }
        assert_eq!(ok().unwrap(), 7);
    }
}
