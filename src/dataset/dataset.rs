//! Ordered record collections with a shared attribute schema.

use crate::core::error::{Result, TreeError};
use crate::core::types::AttributeIndex;
use crate::dataset::record::Record;

/// An ordered sequence of records sharing one attribute schema.
///
/// The schema is the attribute set of the first training row (or of the
/// first row when there are no training rows). Every record must carry
/// exactly those attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<Record>,
    schema: Vec<AttributeIndex>,
}

impl Dataset {
    /// Creates a dataset, validating every record against the schema.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let schema: Vec<AttributeIndex> = records
            .iter()
            .find(|record| !record.is_test())
            .or_else(|| records.first())
            .map(|record| record.attribute_indices().collect())
            .unwrap_or_default();

        for (position, record) in records.iter().enumerate() {
            if !record.attribute_indices().eq(schema.iter().copied()) {
                return Err(TreeError::invalid_record(
                    position + 1,
                    format!(
                        "attributes {:?} do not match schema {:?}",
                        record.attribute_indices().collect::<Vec<_>>(),
                        schema
                    ),
                ));
            }
        }

        Ok(Dataset { records, schema })
    }

    /// Builds a subset that inherits `schema` without revalidation.
    pub(crate) fn with_schema(records: Vec<Record>, schema: Vec<AttributeIndex>) -> Self {
        Dataset { records, schema }
    }

    /// Returns the records in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the attribute indices every record carries, ascending.
    pub fn schema(&self) -> &[AttributeIndex] {
        &self.schema
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the rows with a non-negative label, in input order.
    pub fn training(&self) -> Dataset {
        self.filtered(|record| !record.is_test())
    }

    /// Returns the rows with a negative label, in input order.
    pub fn test(&self) -> Dataset {
        self.filtered(Record::is_test)
    }

    /// Splits into `(training, test)` subsets.
    pub fn split(&self) -> (Dataset, Dataset) {
        (self.training(), self.test())
    }

    fn filtered<F>(&self, keep: F) -> Dataset
    where
        F: Fn(&Record) -> bool,
    {
        let records = self.records.iter().filter(|r| keep(*r)).cloned().collect();
        Dataset::with_schema(records, self.schema.clone())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
