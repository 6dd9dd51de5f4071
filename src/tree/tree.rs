//! The trained decision tree.

use crate::core::error::Result;
use crate::core::types::{AttributeIndex, ClassLabel};
use crate::dataset::dataset::Dataset;
use crate::dataset::record::Record;
use crate::prediction::predictor::classify;
use crate::tree::builder::TreeBuilder;
use crate::tree::node::TreeNode;
use std::fmt;

/// A trained tree together with the attribute schema it was induced over.
///
/// Trees are built once by [`TreeBuilder`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    root: TreeNode,
    attributes: Vec<AttributeIndex>,
}

impl DecisionTree {
    pub(crate) fn new(root: TreeNode, attributes: Vec<AttributeIndex>) -> Self {
        DecisionTree { root, attributes }
    }

    /// Trains a tree with the default sequential builder.
    pub fn train(training: &Dataset) -> Result<Self> {
        TreeBuilder::new().build(training)
    }

    /// Returns the root node.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Returns the attribute schema of the training data.
    pub fn attributes(&self) -> &[AttributeIndex] {
        &self.attributes
    }

    /// Predicts the class of a single record.
    pub fn classify(&self, record: &Record) -> ClassLabel {
        classify(&self.root, record)
    }

    /// Number of decision levels.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of leaves.
    pub fn num_leaves(&self) -> usize {
        self.root.num_leaves()
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.root.num_nodes()
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
