//! Common test utilities for entropy tree integration tests.

#![allow(dead_code)]

use entropy_tree::*;
use rand::prelude::*;

/// Builds a record from `(index, value)` pairs.
pub fn record(label: ClassLabel, values: &[(AttributeIndex, AttributeValue)]) -> Record {
    Record::new(label, values.iter().copied()).expect("valid record")
}

/// The four-row training set with a perfect split on attribute 1 at 5.0.
pub fn separable_training() -> Dataset {
    Dataset::new(vec![
        record(0, &[(1, 1.0), (2, 5.0)]),
        record(0, &[(1, 2.0), (2, 5.0)]),
        record(1, &[(1, 8.0), (2, 1.0)]),
        record(1, &[(1, 9.0), (2, 1.0)]),
    ])
    .expect("valid dataset")
}

/// Renders records in the `label index:value ...` text format.
pub fn to_text(records: &[Record]) -> String {
    records
        .iter()
        .map(|record| format!("{}\n", record))
        .collect()
}

/// Random training rows over attributes `1..=num_attributes` with labels in
/// `0..num_classes`. Values are drawn from a small grid so duplicates occur.
pub fn random_training(
    seed: u64,
    num_records: usize,
    num_attributes: usize,
    num_classes: i64,
) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let records = (0..num_records)
        .map(|_| {
            let label = rng.gen_range(0..num_classes);
            let values: Vec<_> = (1..=num_attributes)
                .map(|index| (index, rng.gen_range(0..20) as f64 * 0.5))
                .collect();
            record(label, &values)
        })
        .collect();
    Dataset::new(records).expect("valid dataset")
}

/// Random test rows matching the schema of [`random_training`].
pub fn random_test(seed: u64, num_records: usize, num_attributes: usize) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_records)
        .map(|_| {
            let values: Vec<_> = (1..=num_attributes)
                .map(|index| (index, rng.gen_range(-1.0..11.0)))
                .collect();
            record(TEST_LABEL, &values)
        })
        .collect()
}

/// Pairs every decision node with the training records that reach it.
pub fn decision_subsets(
    node: &TreeNode,
    records: &[Record],
) -> Vec<(AttributeIndex, AttributeValue, Vec<Record>)> {
    let mut out = Vec::new();
    if let (Some((attribute, threshold)), Some(left), Some(right)) =
        (node.split(), node.left(), node.right())
    {
        out.push((attribute, threshold, records.to_vec()));
        let (left_records, right_records) = partition(records, attribute, threshold);
        out.extend(decision_subsets(left, &left_records));
        out.extend(decision_subsets(right, &right_records));
    }
    out
}
