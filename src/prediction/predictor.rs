//! Tree walking and test-set classification.

use crate::core::types::ClassLabel;
use crate::dataset::dataset::Dataset;
use crate::dataset::record::Record;
use crate::tree::node::TreeNode;
use crate::tree::partition::goes_left;
use crate::tree::tree::DecisionTree;
use std::fmt;

/// Walks `root` for `record` and returns the class of the leaf reached.
///
/// At each decision node the record goes left when its value is at or
/// below the threshold. Every record carries the schema attributes; a
/// record that does not is routed right.
pub fn classify(root: &TreeNode, record: &Record) -> ClassLabel {
    let mut node = root;
    loop {
        match node {
            TreeNode::Leaf { class } => return *class,
            TreeNode::Decision {
                attribute,
                threshold,
                left,
                right,
            } => {
                node = if goes_left(record, *attribute, *threshold) {
                    &**left
                } else {
                    &**right
                };
            }
        }
    }
}

/// Predicted class of one test record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    /// Zero-based position within the test subset
    pub index: usize,
    /// Predicted class label
    pub class: ClassLabel,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Testing point {} belongs to class: {}", self.index, self.class)
    }
}

/// Classifies test records against a trained tree.
#[derive(Debug, Clone, Copy)]
pub struct Predictor<'a> {
    tree: &'a DecisionTree,
}

impl<'a> Predictor<'a> {
    /// Creates a predictor over `tree`.
    pub fn new(tree: &'a DecisionTree) -> Self {
        Predictor { tree }
    }

    /// Predicts one record.
    pub fn predict(&self, record: &Record) -> ClassLabel {
        classify(self.tree.root(), record)
    }

    /// Predicts every record in order, numbering them from zero.
    pub fn predict_all<'r, I>(&self, records: I) -> Vec<Prediction>
    where
        I: IntoIterator<Item = &'r Record>,
    {
        let predictions: Vec<Prediction> = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Prediction {
                index,
                class: self.predict(record),
            })
            .collect();
        if predictions.is_empty() {
            log::warn!("No test records to classify");
        }
        log::info!("Classified {} test record(s)", predictions.len());
        predictions
    }

    /// Predicts the test subset of `dataset`.
    pub fn predict_dataset(&self, dataset: &Dataset) -> Vec<Prediction> {
        self.predict_all(&dataset.test())
    }
}
