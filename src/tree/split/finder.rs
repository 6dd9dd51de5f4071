//! Optimal threshold search for a single continuous attribute.
//!
//! Candidate thresholds are the midpoints between adjacent distinct observed
//! values. Each candidate sends values `<= threshold` left and the rest
//! right; the candidate with the lowest weighted post-split entropy wins,
//! with ties going to the smallest threshold.

use crate::core::types::{AttributeIndex, AttributeValue, ClassLabel};
use crate::tree::class_count::ClassCount;
use crate::tree::entropy::weighted_entropy;
use std::fmt;

/// The best threshold found for one attribute over one subset.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitCandidate {
    /// Attribute the threshold applies to
    pub attribute: AttributeIndex,
    /// Cut point, strictly between two observed distinct values
    pub threshold: AttributeValue,
    /// Post-split entropy, each side weighted by its share of records
    pub weighted_entropy: f64,
    /// Class counts of records with value `<= threshold`
    pub left_counts: ClassCount,
    /// Class counts of records with value `> threshold`
    pub right_counts: ClassCount,
}

impl SplitCandidate {
    /// Number of records routed left.
    pub fn left_count(&self) -> usize {
        self.left_counts.total()
    }

    /// Number of records routed right.
    pub fn right_count(&self) -> usize {
        self.right_counts.total()
    }

    /// Orders candidates by score, then by attribute index.
    pub(crate) fn is_better_than(&self, other: &SplitCandidate) -> bool {
        self.weighted_entropy < other.weighted_entropy
            || (self.weighted_entropy == other.weighted_entropy && self.attribute < other.attribute)
    }
}

impl fmt::Display for SplitCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attribute {} <= {} (entropy {:.6}, {} left / {} right)",
            self.attribute,
            self.threshold,
            self.weighted_entropy,
            self.left_count(),
            self.right_count()
        )
    }
}

/// Midpoint of two adjacent distinct values, if it separates them.
fn midpoint(lower: AttributeValue, upper: AttributeValue) -> Option<AttributeValue> {
    let mid = (lower + upper) / 2.0;
    let mid = if mid.is_finite() {
        mid
    } else {
        lower / 2.0 + upper / 2.0
    };
    (lower < mid && mid < upper).then_some(mid)
}

/// Candidate thresholds for the given values, in ascending order.
pub fn candidate_thresholds(values: &[AttributeValue]) -> Vec<AttributeValue> {
    let mut distinct = values.to_vec();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();
    distinct
        .windows(2)
        .filter_map(|pair| midpoint(pair[0], pair[1]))
        .collect()
}

/// Finds the threshold on `attribute` that minimizes weighted entropy.
///
/// `values[i]` and `labels[i]` describe the same record. Returns `None` when
/// fewer than two distinct values exist, since no threshold can separate
/// them.
///
/// # Panics
///
/// Panics if `values` and `labels` differ in length.
pub fn best_split(
    attribute: AttributeIndex,
    values: &[AttributeValue],
    labels: &[ClassLabel],
) -> Option<SplitCandidate> {
    assert_eq!(
        values.len(),
        labels.len(),
        "every value needs a matching label"
    );

    let mut pairs: Vec<(AttributeValue, ClassLabel)> =
        values.iter().copied().zip(labels.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut left = ClassCount::new();
    let mut right: ClassCount = labels.iter().copied().collect();
    let mut best: Option<SplitCandidate> = None;

    // Sweep the sorted pairs one distinct value at a time, moving each group
    // from the right side to the left side before scoring the midpoint that
    // follows it.
    let mut start = 0;
    while start < pairs.len() {
        let value = pairs[start].0;
        let mut end = start;
        while end < pairs.len() && pairs[end].0 == value {
            left.add(pairs[end].1);
            right.remove(pairs[end].1);
            end += 1;
        }

        let Some(&(next_value, _)) = pairs.get(end) else {
            break;
        };
        start = end;

        let Some(threshold) = midpoint(value, next_value) else {
            continue;
        };
        let score = weighted_entropy(&left.counts(), &right.counts());

        if best.as_ref().map_or(true, |b| score < b.weighted_entropy) {
            best = Some(SplitCandidate {
                attribute,
                threshold,
                weighted_entropy: score,
                left_counts: left.clone(),
                right_counts: right.clone(),
            });
        }
    }

    best
}
