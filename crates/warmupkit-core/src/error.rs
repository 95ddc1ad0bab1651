//! Error handling for WarmupKit.
//!
//! The generation engine itself is total over its clamped numeric domain
//! and never constructs an error; every variant here originates in a
//! parameter resolver or in the configuration layer. All error types use
//! `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Unified error type for WarmupKit.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed numeric or enumerated text entered by a user.
    ///
    /// Resolvers catch and report this locally (re-prompt); it is never
    /// propagated into the engine.
    #[error("Invalid input: {0}")]
    InputFormat(String),

    /// Configuration file missing or malformed. Fatal to startup when a
    /// config path was explicitly requested.
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    /// A generated program could not be written out. The already-produced
    /// text is unaffected and remains available for alternate delivery.
    #[error("Failed to write program: {0}")]
    Persistence(String),

    /// Standard I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::ConfigLoad(_))
    }

    /// Check if this is a persistence error
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InputFormat("expected a number, got 'abc'".to_string());
        assert_eq!(err.to_string(), "Invalid input: expected a number, got 'abc'");

        let err = Error::ConfigLoad("config.json not found".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to load configuration: config.json not found"
        );

        let err = Error::Persistence("disk full".to_string());
        assert_eq!(err.to_string(), "Failed to write program: disk full");
    }

    #[test]
    fn test_error_predicates() {
        assert!(Error::ConfigLoad("x".to_string()).is_config_error());
        assert!(!Error::ConfigLoad("x".to_string()).is_persistence_error());
        assert!(Error::Persistence("x".to_string()).is_persistence_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
