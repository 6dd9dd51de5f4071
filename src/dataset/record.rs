//! A single labeled or unlabeled data row.

use crate::core::constants::TEST_LABEL;
use crate::core::error::{Result, TreeError};
use crate::core::types::{AttributeIndex, AttributeValue, ClassLabel};
use std::collections::BTreeMap;
use std::fmt;

/// One data row: a class label plus sparse `(index, value)` attributes.
///
/// Attributes are stored keyed by index, so the order they were written in
/// does not matter. Records are immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    label: ClassLabel,
    attributes: BTreeMap<AttributeIndex, AttributeValue>,
}

impl Record {
    /// Creates a record, rejecting duplicate indices and non-finite values.
    pub fn new<I>(label: ClassLabel, attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (AttributeIndex, AttributeValue)>,
    {
        let mut map = BTreeMap::new();
        for (index, value) in attributes {
            if !value.is_finite() {
                return Err(TreeError::invalid_record(
                    0,
                    format!("attribute {} has non-numeric value {}", index, value),
                ));
            }
            if map.insert(index, value).is_some() {
                return Err(TreeError::invalid_record(
                    0,
                    format!("attribute {} appears more than once", index),
                ));
            }
        }
        Ok(Record {
            label,
            attributes: map,
        })
    }

    /// Creates a test record carrying the [`TEST_LABEL`] sentinel.
    pub fn unlabeled<I>(attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (AttributeIndex, AttributeValue)>,
    {
        Self::new(TEST_LABEL, attributes)
    }

    /// Returns the class label (negative for test rows).
    pub fn label(&self) -> ClassLabel {
        self.label
    }

    /// Returns true if this row belongs to the test subset.
    pub fn is_test(&self) -> bool {
        self.label < 0
    }

    /// Returns the value of an attribute, if the record carries it.
    pub fn value(&self, index: AttributeIndex) -> Option<AttributeValue> {
        self.attributes.get(&index).copied()
    }

    /// Iterates attribute indices in ascending order.
    pub fn attribute_indices(&self) -> impl Iterator<Item = AttributeIndex> + '_ {
        self.attributes.keys().copied()
    }

    /// Iterates `(index, value)` pairs in ascending index order.
    pub fn attributes(&self) -> impl Iterator<Item = (AttributeIndex, AttributeValue)> + '_ {
        self.attributes.iter().map(|(&index, &value)| (index, value))
    }

    /// Returns the number of attributes.
    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        for (index, value) in self.attributes() {
            write!(f, " {}:{}", index, value)?;
        }
        Ok(())
    }
}
