//! Best attribute selection across all attributes of a subset.

use crate::core::error::{Result, TreeError};
use crate::core::types::{AttributeIndex, AttributeValue, ClassLabel};
use crate::dataset::record::Record;
use crate::tree::split::finder::{best_split, SplitCandidate};

/// Runs the threshold search on every attribute and returns the split with
/// the lowest weighted entropy.
///
/// Only records carrying an attribute take part in its search. Attributes
/// with fewer than two distinct values are skipped. Equal scores resolve to
/// the smaller attribute index, independent of the order of `attributes`.
///
/// Fails with [`TreeError::NoUsableAttribute`] when no attribute can split
/// the subset.
pub fn select_best(records: &[Record], attributes: &[AttributeIndex]) -> Result<SplitCandidate> {
    let mut best: Option<SplitCandidate> = None;

    for &attribute in attributes {
        let (values, labels): (Vec<AttributeValue>, Vec<ClassLabel>) = records
            .iter()
            .filter_map(|record| record.value(attribute).map(|value| (value, record.label())))
            .unzip();

        let Some(candidate) = best_split(attribute, &values, &labels) else {
            log::trace!("Attribute {} has no usable threshold", attribute);
            continue;
        };

        if best.as_ref().map_or(true, |b| candidate.is_better_than(b)) {
            best = Some(candidate);
        }
    }

    best.ok_or(TreeError::NoUsableAttribute {
        records: records.len(),
    })
}
