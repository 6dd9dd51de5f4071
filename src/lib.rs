//! # Entropy Tree
//!
//! A fixed-depth binary decision tree classifier for sparse numeric records.
//!
//! Training searches every attribute for the threshold that minimizes the
//! weighted Shannon entropy of the split, partitions the rows, and repeats on
//! each side until the depth bound of two decision levels. Classification
//! walks the tree comparing record values against the learned thresholds.
//!
//! ## Quick Start
//!
//! ```rust
//! use entropy_tree::{load_from_str, DecisionTree, Predictor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = load_from_str(
//!     "0 1:1.0 2:5.0\n\
//!      0 1:2.0 2:5.0\n\
//!      1 1:8.0 2:1.0\n\
//!      1 1:9.0 2:1.0\n\
//!      -1 1:1.5 2:5.0\n",
//! )?;
//!
//! let tree = DecisionTree::train(&dataset.training())?;
//! for prediction in Predictor::new(&tree).predict_dataset(&dataset) {
//!     println!("{}", prediction);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: types, constants and the error type
//! - [`config`]: runtime configuration
//! - [`dataset`]: records, datasets and text ingestion
//! - [`tree`]: entropy, split search, partitioning and tree induction
//! - [`prediction`]: tree walking and test-set classification

#![warn(missing_docs)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    non_snake_case,
    non_upper_case_globals
)]

pub mod config;
pub mod core;
pub mod dataset;
pub mod prediction;
pub mod tree;

pub use crate::config::{load_config, Config, ConfigBuilder};
pub use crate::core::{
    constants::*,
    error::{Result, TreeError},
    types::*,
};
pub use crate::dataset::{
    load_from_path, load_from_reader, load_from_stdin, load_from_str, parse_record, Dataset,
    Record,
};
pub use crate::prediction::{classify, Prediction, Predictor};
pub use crate::tree::{
    best_split, candidate_thresholds, entropy, partition, select_best, weighted_entropy,
    ClassCount, DecisionTree, SplitCandidate, TreeBuilder, TreeNode,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
