//! Error handling and error types for the entropy tree classifier.
//!
//! Every fallible operation in the crate returns [`Result`]. Degenerate
//! training subsets surface as [`TreeError::NoUsableAttribute`], which the
//! tree builder recovers from by emitting a majority leaf.

use std::io;
use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum TreeError {
    /// Malformed input row
    #[error("Invalid record at line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    /// Dataset-level errors
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// No attribute yields a valid split for the subset
    #[error("No usable attribute to split {records} record(s)")]
    NoUsableAttribute { records: usize },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// File I/O errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON configuration errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// TOML configuration errors
    #[error("TOML error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
}

/// Type alias for Results using TreeError
pub type Result<T> = std::result::Result<T, TreeError>;

impl TreeError {
    /// Create an invalid record error
    pub fn invalid_record<S: Into<String>>(line: usize, message: S) -> Self {
        TreeError::InvalidRecord {
            line,
            message: message.into(),
        }
    }

    /// Create a dataset error
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        TreeError::Dataset {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        TreeError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        TreeError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for conditions the tree builder resolves structurally.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TreeError::NoUsableAttribute { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TreeError::invalid_record(3, "missing value");
        assert_eq!(err.to_string(), "Invalid record at line 3: missing value");

        let err = TreeError::invalid_parameter("max_depth", "5", "must be 2");
        assert_eq!(err.to_string(), "Invalid parameter: max_depth = 5, must be 2");
    }

    #[test]
    fn test_recoverable() {
        assert!(TreeError::NoUsableAttribute { records: 1 }.is_recoverable());
        assert!(!TreeError::dataset("empty").is_recoverable());
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: TreeError = io_err.into();
        assert!(matches!(err, TreeError::Io { .. }));
    }
}
