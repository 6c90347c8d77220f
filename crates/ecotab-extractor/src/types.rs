//! Request and response types for extraction

use crate::summary::TableSummary;
use ecotab_domain::FinalTable;

/// Request to extract indicators from document text
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Cleaned UTF-8 document text
    pub text: String,

    /// Source identifier (file name, hash or user-provided)
    pub source_id: String,
}

impl ExtractionRequest {
    /// Create a request
    pub fn new(text: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_id: source_id.into(),
        }
    }
}

/// Result of an extraction run
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Deduplicated, sorted indicator table
    pub table: FinalTable,

    /// Statistics over `table`
    pub summary: TableSummary,

    /// Blocks whose generation call failed
    pub failures: Vec<BlockFailure>,

    /// Metadata about the run
    pub metadata: ExtractionMetadata,
}

/// A block that contributed no records because generation failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFailure {
    /// Zero-based block index
    pub block_index: usize,

    /// Reason for failure
    pub reason: String,
}

/// Metadata about an extraction run
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMetadata {
    /// Source identifier
    pub source_id: String,

    /// Timestamp when extraction finished (seconds since the Unix epoch)
    pub timestamp: u64,

    /// Name of the generation model used
    pub model_name: String,

    /// Blocks produced by the segmenter
    pub blocks_total: usize,

    /// Blocks whose generation call failed or timed out
    pub blocks_failed: usize,

    /// Non-blank response lines that were not records
    pub lines_skipped: usize,

    /// Candidates rejected by field validation
    pub candidates_rejected: usize,

    /// Records that passed validation, before the quality filter
    pub records_validated: usize,

    /// Records kept by the quality filter, before dedup
    pub records_retained: usize,

    /// Rows dropped as duplicates
    pub duplicates_removed: usize,

    /// `1 - final / retained`, zero when nothing was retained
    pub duplicate_rate: f64,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
