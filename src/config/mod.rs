//! Configuration management.
//!
//! Settings are layered: defaults, then an optional `.toml`/`.json` file,
//! then `ENTROPY_TREE_*` environment variables. Command-line flags are
//! applied on top by the binary.

pub mod core;

pub use self::core::{Config, ConfigBuilder};

use crate::core::constants::DEFAULT_CONFIG_FILE;
use crate::core::error::Result;
use std::path::Path;

/// Resolves configuration from an explicit file, or from
/// [`DEFAULT_CONFIG_FILE`] in the working directory when present, and then
/// the environment.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            log::debug!("Using configuration file {}", DEFAULT_CONFIG_FILE);
            Config::load_from_file(DEFAULT_CONFIG_FILE)?
        }
        None => Config::default(),
    };
    config.apply_environment()
}
