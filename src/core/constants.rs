//! System constants for the entropy tree classifier.

use crate::core::types::ClassLabel;
use static_assertions::const_assert_eq;

/// Number of decision levels in an induced tree. Nodes created at this depth
/// are always leaves.
pub const MAX_DEPTH: usize = 2;

const_assert_eq!(MAX_DEPTH, 2);

/// Label assigned to rows built without a class (test rows).
pub const TEST_LABEL: ClassLabel = -1;

/// Separator between an attribute index and its value in a record token.
pub const ATTRIBUTE_SEPARATOR: char = ':';

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "entropy-tree.toml";

/// Prefix shared by all environment variables read by the configuration layer.
pub const ENV_PREFIX: &str = "ENTROPY_TREE_";
