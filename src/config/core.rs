//! Runtime configuration structure and builder.

use crate::core::constants::{ENV_PREFIX, MAX_DEPTH};
use crate::core::error::{Result, TreeError};
use crate::core::types::VerbosityLevel;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime configuration for training and classification.
///
/// The induction algorithm itself is fixed; these settings only control how
/// it is executed and reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build sibling subtrees concurrently
    pub parallel_branches: bool,
    /// Verbosity level for logging
    pub verbosity: VerbosityLevel,
    /// Log wall-clock durations of training and classification
    pub report_timing: bool,
    /// Tree depth bound; only `MAX_DEPTH` is accepted
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            parallel_branches: false,
            verbosity: VerbosityLevel::default(),
            report_timing: false,
            max_depth: MAX_DEPTH,
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_depth != MAX_DEPTH {
            return Err(TreeError::invalid_parameter(
                "max_depth",
                self.max_depth.to_string(),
                format!("only depth {} trees are supported", MAX_DEPTH),
            ));
        }
        Ok(())
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TreeError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(TreeError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Override fields from `ENTROPY_TREE_*` environment variables
    pub fn apply_environment(mut self) -> Result<Self> {
        if let Some(val) = env_var("PARALLEL") {
            self.parallel_branches = parse_bool("PARALLEL", &val)?;
        }

        if let Some(val) = env_var("TIMING") {
            self.report_timing = parse_bool("TIMING", &val)?;
        }

        if let Some(val) = env_var("VERBOSITY") {
            self.verbosity = val.parse().map_err(|reason: String| {
                TreeError::invalid_parameter(format!("{}VERBOSITY", ENV_PREFIX), val, reason)
            })?;
        }

        self.validate()?;
        Ok(self)
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(format!("{}{}", ENV_PREFIX, name)).ok()
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(TreeError::invalid_parameter(
            format!("{}{}", ENV_PREFIX, name),
            value,
            "expected a boolean",
        )),
    }
}

/// Builder for [`Config`] that collects validation errors until `build`.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
    validation_errors: Vec<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: Config) -> Self {
        ConfigBuilder {
            config,
            validation_errors: Vec::new(),
        }
    }

    /// Build sibling subtrees concurrently
    pub fn parallel_branches(mut self, enabled: bool) -> Self {
        self.config.parallel_branches = enabled;
        self
    }

    /// Set the verbosity level
    pub fn verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.config.verbosity = verbosity;
        self
    }

    /// Log training and classification durations
    pub fn report_timing(mut self, enabled: bool) -> Self {
        self.config.report_timing = enabled;
        self
    }

    /// Set the depth bound
    pub fn max_depth(mut self, depth: usize) -> Self {
        if depth != MAX_DEPTH {
            self.validation_errors
                .push(format!("max_depth must be {}", MAX_DEPTH));
        }
        self.config.max_depth = depth;
        self
    }

    /// Build the configuration, failing on any collected validation error
    pub fn build(self) -> Result<Config> {
        if !self.validation_errors.is_empty() {
            return Err(TreeError::config(self.validation_errors.join("; ")));
        }
        self.config.validate()?;
        Ok(self.config)
    }
}
