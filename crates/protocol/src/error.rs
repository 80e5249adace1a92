//! Error types for the prodx-protocol crate.
//!
//! Store operations never fail; the only fallible boundary is turning
//! user-entered text into protocol values.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// A deadline string could not be coerced into a point in time.
    #[error("invalid deadline {input:?}: expected YYYY-MM-DD, YYYY-MM-DDTHH:MM or RFC 3339")]
    InvalidDeadline {
        /// The text that failed to parse.
        input: String,
    },

    /// A local date-time does not exist in the local time zone (DST gap).
    #[error("deadline {input:?} does not exist in the local time zone")]
    NonexistentLocalTime {
        /// The text that failed to resolve.
        input: String,
    },
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::InvalidDeadline {
            input: "tomorrow".to_string(),
        };
        assert!(err.to_string().contains("\"tomorrow\""));

        let err = ProtocolError::NonexistentLocalTime {
            input: "2025-03-30T02:30".to_string(),
        };
        assert!(err.to_string().contains("local time zone"));
    }
}
