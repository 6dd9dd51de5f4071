//! Split search: per-attribute threshold search and attribute selection.

pub mod finder;
pub mod selector;

pub use finder::{best_split, candidate_thresholds, SplitCandidate};
pub use selector::select_best;
