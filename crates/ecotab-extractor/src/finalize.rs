//! Deduplication and canonical ordering of the final table

use ecotab_domain::{FinalTable, ValidatedRecord};
use std::collections::HashSet;
use tracing::debug;

/// The final table plus dedup statistics
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizeReport {
    /// Deduplicated, sorted table
    pub table: FinalTable,

    /// Records handed to finalize
    pub records_before: usize,

    /// Records dropped as duplicates
    pub duplicates_removed: usize,
}

impl FinalizeReport {
    /// Share of input records removed as duplicates, in `[0, 1]`
    ///
    /// Zero when there was no input.
    pub fn duplicate_rate(&self) -> f64 {
        if self.records_before == 0 {
            return 0.0;
        }
        1.0 - self.table.len() as f64 / self.records_before as f64
    }
}

/// Drop duplicate `(indicator, value)` pairs keeping the first, then sort by
/// `(indicator, period)`
///
/// Keys compare exactly and case-sensitively. The sort is stable, so rows with
/// equal keys keep their accumulation order.
pub fn finalize(records: Vec<ValidatedRecord>) -> FinalizeReport {
    let records_before = records.len();

    let mut seen = HashSet::with_capacity(records_before);
    let mut rows: Vec<ValidatedRecord> = records
        .into_iter()
        .filter(|record| {
            let (indicator, value) = record.dedup_key();
            seen.insert((indicator.to_owned(), value.to_owned()))
        })
        .collect();

    rows.sort_by(|a, b| {
        a.indicator
            .cmp(&b.indicator)
            .then_with(|| a.period.cmp(&b.period))
    });

    let duplicates_removed = records_before - rows.len();
    debug!(
        "Finalized {} records into {} rows ({} duplicates)",
        records_before,
        rows.len(),
        duplicates_removed
    );

    FinalizeReport {
        table: FinalTable::from_rows(rows),
        records_before,
        duplicates_removed,
    }
}
