//! Core data types for the entropy tree classifier.
//!
//! These aliases keep the numeric representation of labels, attribute
//! indices and attribute values consistent across ingestion, training and
//! classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Class label type. Non-negative labels mark training rows, negative labels
/// mark test rows.
pub type ClassLabel = i64;

/// Attribute index type as written in the `index:value` tokens of a record.
pub type AttributeIndex = usize;

/// Attribute value type.
pub type AttributeValue = f64;

/// Verbosity levels for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbosityLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warning,
    /// Information, warnings, and errors
    Info,
    /// Debug information
    Debug,
}

impl Default for VerbosityLevel {
    fn default() -> Self {
        VerbosityLevel::Warning
    }
}

impl VerbosityLevel {
    /// Returns the `log` level filter matching this verbosity.
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            VerbosityLevel::Error => log::LevelFilter::Error,
            VerbosityLevel::Warning => log::LevelFilter::Warn,
            VerbosityLevel::Info => log::LevelFilter::Info,
            VerbosityLevel::Debug => log::LevelFilter::Debug,
        }
    }
}

impl fmt::Display for VerbosityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerbosityLevel::Error => write!(f, "error"),
            VerbosityLevel::Warning => write!(f, "warning"),
            VerbosityLevel::Info => write!(f, "info"),
            VerbosityLevel::Debug => write!(f, "debug"),
        }
    }
}

impl FromStr for VerbosityLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(VerbosityLevel::Error),
            "warn" | "warning" => Ok(VerbosityLevel::Warning),
            "info" => Ok(VerbosityLevel::Info),
            "debug" => Ok(VerbosityLevel::Debug),
            other => Err(format!("unknown verbosity level: {}", other)),
        }
    }
}
