//! Core infrastructure module for the entropy tree classifier.
//!
//! - [`types`]: label, attribute and verbosity types
//! - [`constants`]: the depth bound, the test-row sentinel and configuration
//!   defaults
//! - [`error`]: the crate error type and `Result` alias

pub mod constants;
pub mod error;
pub mod types;

pub use constants::*;
pub use error::{Result, TreeError};
pub use types::*;
