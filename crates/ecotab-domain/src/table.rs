//! Final table - the sole output of the extraction pipeline

use crate::record::ValidatedRecord;

/// Deduplicated, ordered indicator table
///
/// Built by the extractor's finalize step. Rows are unique on
/// `(indicator, value)` and sorted by `(indicator, period)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalTable {
    rows: Vec<ValidatedRecord>,
}

impl FinalTable {
    /// Wrap rows that are already deduplicated and sorted
    pub fn from_rows(rows: Vec<ValidatedRecord>) -> Self {
        Self { rows }
    }

    /// Rows in canonical order
    pub fn rows(&self) -> &[ValidatedRecord] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the table, returning its rows
    pub fn into_rows(self) -> Vec<ValidatedRecord> {
        self.rows
    }

    /// Iterate over rows
    pub fn iter(&self) -> std::slice::Iter<'_, ValidatedRecord> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a FinalTable {
    type Item = &'a ValidatedRecord;
    type IntoIter = std::slice::Iter<'a, ValidatedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
