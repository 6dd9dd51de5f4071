//! Partitioning of a record subset around a threshold.

use crate::core::types::{AttributeIndex, AttributeValue};
use crate::dataset::record::Record;

/// Returns true if `record` is routed to the left side of a split on
/// `attribute` at `threshold`. Records lacking the attribute go right.
#[inline]
pub fn goes_left(record: &Record, attribute: AttributeIndex, threshold: AttributeValue) -> bool {
    record
        .value(attribute)
        .map_or(false, |value| value <= threshold)
}

/// Splits `records` into `(left, right)` where left holds the records whose
/// value for `attribute` is at or below `threshold`.
///
/// Both sides keep the input order and every record lands in exactly one of
/// them. The input is not modified.
pub fn partition(
    records: &[Record],
    attribute: AttributeIndex,
    threshold: AttributeValue,
) -> (Vec<Record>, Vec<Record>) {
    records
        .iter()
        .cloned()
        .partition(|record| goes_left(record, attribute, threshold))
}
