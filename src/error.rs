//! All error types for the langmsg crate.
//!
//! These are returned from all fallible operations (message resolution,
//! catalog loading, validation).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A message part that cannot be resolved: either a literal containing a
    /// disallowed character, or a resource key absent from both the active
    /// language and the default language. Carries the offending literal or
    /// key name.
    #[error("message part `{0}` is not valid")]
    InvalidMessagePart(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a new invalid-message-part error naming the offending part.
    pub fn invalid_message_part(part: impl Into<String>) -> Self {
        Error::InvalidMessagePart(part.into())
    }

    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_invalid_message_part_error() {
        let error = Error::invalid_message_part("#");
        assert_eq!(error.to_string(), "message part `#` is not valid");
    }

    #[test]
    fn test_invalid_message_part_matches_pattern() {
        let error = Error::invalid_message_part("newVersion");
        assert!(error.to_string().contains("is not valid"));
        assert!(error.to_string().contains("newVersion"));
    }

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Parse(json_error);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_validation_error() {
        let error = Error::validation_error("Validation failed");
        assert_eq!(error.to_string(), "validation error: Validation failed");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::invalid_message_part("test");
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidMessagePart"));
        assert!(debug.contains("test"));
    }
}
