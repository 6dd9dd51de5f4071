//! Per-class occurrence counts and majority voting.

use crate::core::types::ClassLabel;
use crate::dataset::record::Record;
use std::collections::BTreeMap;

/// Occurrence count of each class label within a record subset.
///
/// Labels are kept in ascending order, which makes [`ClassCount::majority`]
/// resolve ties towards the smaller label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassCount {
    counts: BTreeMap<ClassLabel, usize>,
    total: usize,
}

impl ClassCount {
    /// Creates an empty count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the labels of the given records.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records.into_iter().map(Record::label).collect()
    }

    /// Adds one occurrence of `label`.
    pub fn add(&mut self, label: ClassLabel) {
        *self.counts.entry(label).or_insert(0) += 1;
        self.total += 1;
    }

    /// Removes one occurrence of `label`, if present.
    pub fn remove(&mut self, label: ClassLabel) {
        if let Some(count) = self.counts.get_mut(&label) {
            *count -= 1;
            self.total -= 1;
            if *count == 0 {
                self.counts.remove(&label);
            }
        }
    }

    /// Returns the count for `label`.
    pub fn get(&self, label: ClassLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    /// Total number of counted records.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns true if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct labels with a nonzero count.
    pub fn num_classes(&self) -> usize {
        self.counts.len()
    }

    /// Returns the label if exactly one class is present.
    pub fn single_class(&self) -> Option<ClassLabel> {
        if self.counts.len() == 1 {
            self.counts.keys().next().copied()
        } else {
            None
        }
    }

    /// Counts in ascending label order.
    pub fn counts(&self) -> Vec<usize> {
        self.counts.values().copied().collect()
    }

    /// Iterates `(label, count)` in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (ClassLabel, usize)> + '_ {
        self.counts.iter().map(|(&label, &count)| (label, count))
    }

    /// Most frequent label; the smallest label wins ties. `None` when empty.
    pub fn majority(&self) -> Option<ClassLabel> {
        let mut best: Option<(ClassLabel, usize)> = None;
        for (label, count) in self.iter() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((label, count)),
            }
        }
        best.map(|(label, _)| label)
    }
}

impl FromIterator<ClassLabel> for ClassCount {
    fn from_iter<T: IntoIterator<Item = ClassLabel>>(iter: T) -> Self {
        let mut count = ClassCount::new();
        for label in iter {
            count.add(label);
        }
        count
    }
}
