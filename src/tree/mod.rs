//! Tree learning module.
//!
//! Provides the entropy measure, per-attribute threshold search, attribute
//! selection, subset partitioning and the depth-bounded tree builder.

pub mod builder;
pub mod class_count;
pub mod entropy;
pub mod node;
pub mod partition;
pub mod split;
pub mod tree;

pub use builder::TreeBuilder;
pub use class_count::ClassCount;
pub use entropy::{entropy, weighted_entropy};
pub use node::TreeNode;
pub use partition::{goes_left, partition};
pub use split::{best_split, candidate_thresholds, select_best, SplitCandidate};
pub use tree::DecisionTree;
