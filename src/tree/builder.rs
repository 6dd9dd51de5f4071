//! Depth-bounded tree induction.
//!
//! Growth is a single recursive function over `(subset, depth)`:
//!
//! - at `MAX_DEPTH` the subset becomes a majority-class leaf;
//! - below the root a subset holding one class becomes a leaf;
//! - otherwise the best attribute split is selected and both sides are
//!   grown one level deeper. A subset with no usable split collapses to a
//!   majority-class leaf.
//!
//! The root always attempts a split, even when the training rows share a
//! single class.

use crate::config::Config;
use crate::core::constants::MAX_DEPTH;
use crate::core::error::{Result, TreeError};
use crate::core::types::AttributeIndex;
use crate::dataset::dataset::Dataset;
use crate::dataset::record::Record;
use crate::tree::class_count::ClassCount;
use crate::tree::node::TreeNode;
use crate::tree::partition::partition;
use crate::tree::split::select_best;
use crate::tree::tree::DecisionTree;

/// Builds a [`DecisionTree`] from a training subset.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    max_depth: usize,
    parallel_branches: bool,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Creates a sequential builder bounded at [`MAX_DEPTH`].
    pub fn new() -> Self {
        TreeBuilder {
            max_depth: MAX_DEPTH,
            parallel_branches: false,
        }
    }

    /// Creates a builder from runtime configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new().parallel_branches(config.parallel_branches)
    }

    /// Grow sibling subtrees on the rayon thread pool.
    pub fn parallel_branches(mut self, enabled: bool) -> Self {
        self.parallel_branches = enabled;
        self
    }

    /// Induces a tree from `training`. All records must be training rows.
    pub fn build(&self, training: &Dataset) -> Result<DecisionTree> {
        if training.is_empty() {
            return Err(TreeError::dataset("no training records to build a tree from"));
        }
        if let Some(position) = training.records().iter().position(Record::is_test) {
            return Err(TreeError::dataset(format!(
                "record {} is a test row and cannot be used for training",
                position + 1
            )));
        }

        let attributes = training.schema();
        let root = self.grow(training.records(), attributes, 0)?;
        if root.is_leaf() {
            log::warn!("No attribute separates the training records; the tree is a single leaf");
        }

        log::info!(
            "Built tree with {} node(s), {} leaf/leaves, depth {} from {} record(s)",
            root.num_nodes(),
            root.num_leaves(),
            root.depth(),
            training.len()
        );
        log::debug!("Induced tree:\n{}", root);

        Ok(DecisionTree::new(root, attributes.to_vec()))
    }

    fn grow(
        &self,
        records: &[Record],
        attributes: &[AttributeIndex],
        depth: usize,
    ) -> Result<TreeNode> {
        let counts = ClassCount::from_records(records);
        log::debug!(
            "Depth {}: {} record(s) over {} class(es)",
            depth,
            counts.total(),
            counts.num_classes()
        );

        if depth >= self.max_depth {
            let leaf = majority_leaf(&counts, depth)?;
            log::debug!("Depth {}: depth bound reached, {:?}", depth, leaf);
            return Ok(leaf);
        }

        if depth > 0 {
            if let Some(class) = counts.single_class() {
                log::debug!("Depth {}: pure subset of class {}", depth, class);
                return Ok(TreeNode::leaf(class));
            }
        }

        let split = match select_best(records, attributes) {
            Ok(split) => split,
            Err(err) if err.is_recoverable() => {
                let leaf = majority_leaf(&counts, depth)?;
                log::debug!("Depth {}: {}, collapsing to {:?}", depth, err, leaf);
                return Ok(leaf);
            }
            Err(err) => return Err(err),
        };
        log::debug!("Depth {}: split on {}", depth, split);

        let (left_records, right_records) = partition(records, split.attribute, split.threshold);
        let (left, right) = if self.parallel_branches {
            rayon::join(
                || self.grow(&left_records, attributes, depth + 1),
                || self.grow(&right_records, attributes, depth + 1),
            )
        } else {
            (
                self.grow(&left_records, attributes, depth + 1),
                self.grow(&right_records, attributes, depth + 1),
            )
        };

        Ok(TreeNode::decision(
            split.attribute,
            split.threshold,
            left?,
            right?,
        ))
    }
}

fn majority_leaf(counts: &ClassCount, depth: usize) -> Result<TreeNode> {
    counts
        .majority()
        .map(TreeNode::leaf)
        .ok_or_else(|| TreeError::dataset(format!("empty subset at depth {}", depth)))
}
