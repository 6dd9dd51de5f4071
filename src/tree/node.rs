//! Tree node representation.
//!
//! A node is either a decision on one attribute threshold with two owned
//! children, or a leaf holding the predicted class.

use crate::core::types::{AttributeIndex, AttributeValue, ClassLabel};
use std::fmt;

/// Node of an induced decision tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Internal node: records with `value <= threshold` go left.
    Decision {
        /// Attribute compared at this node
        attribute: AttributeIndex,
        /// Split threshold
        threshold: AttributeValue,
        /// Subtree for values at or below the threshold
        left: Box<TreeNode>,
        /// Subtree for values above the threshold
        right: Box<TreeNode>,
    },
    /// Terminal node.
    Leaf {
        /// Class assigned to every record reaching this leaf
        class: ClassLabel,
    },
}

impl TreeNode {
    /// Creates a leaf node.
    pub fn leaf(class: ClassLabel) -> Self {
        TreeNode::Leaf { class }
    }

    /// Creates a decision node.
    pub fn decision(
        attribute: AttributeIndex,
        threshold: AttributeValue,
        left: TreeNode,
        right: TreeNode,
    ) -> Self {
        TreeNode::Decision {
            attribute,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns true if this node is a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Returns the predicted class of a leaf.
    pub fn class(&self) -> Option<ClassLabel> {
        match self {
            TreeNode::Leaf { class } => Some(*class),
            TreeNode::Decision { .. } => None,
        }
    }

    /// Returns the `(attribute, threshold)` of a decision node.
    pub fn split(&self) -> Option<(AttributeIndex, AttributeValue)> {
        match self {
            TreeNode::Decision {
                attribute,
                threshold,
                ..
            } => Some((*attribute, *threshold)),
            TreeNode::Leaf { .. } => None,
        }
    }

    /// Returns the left child of a decision node.
    pub fn left(&self) -> Option<&TreeNode> {
        match self {
            TreeNode::Decision { left, .. } => Some(&**left),
            TreeNode::Leaf { .. } => None,
        }
    }

    /// Returns the right child of a decision node.
    pub fn right(&self) -> Option<&TreeNode> {
        match self {
            TreeNode::Decision { right, .. } => Some(&**right),
            TreeNode::Leaf { .. } => None,
        }
    }

    /// Number of decision levels below and including this node.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Decision { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Total number of nodes in this subtree.
    pub fn num_nodes(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Decision { left, right, .. } => 1 + left.num_nodes() + right.num_nodes(),
        }
    }

    /// Number of leaves in this subtree.
    pub fn num_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Decision { left, right, .. } => left.num_leaves() + right.num_leaves(),
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            TreeNode::Leaf { class } => writeln!(f, "{}leaf: class {}", pad, class),
            TreeNode::Decision {
                attribute,
                threshold,
                left,
                right,
            } => {
                writeln!(f, "{}attribute {} <= {}", pad, attribute, threshold)?;
                left.render(f, indent + 1)?;
                writeln!(f, "{}attribute {} > {}", pad, attribute, threshold)?;
                right.render(f, indent + 1)
            }
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}
