//! Ecotab Domain Layer
//!
//! This crate contains the domain model for Ecotab, the economic indicator
//! extraction pipeline. It has ZERO external dependencies and defines the
//! value types and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Text block**: a bounded, word-aligned chunk of document text
//! - **Candidate record**: an unvalidated guess parsed from one response line,
//!   in either the rich (4-field) or legacy (3-field) schema
//! - **Validated record**: a candidate that passed the field rules and carries
//!   a period (explicit, inferred, or unspecified)
//! - **Final table**: the deduplicated, ordered output of the pipeline
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and trait definitions only
//! - Generation providers live in `ecotab-llm`
//! - Pipeline logic lives in `ecotab-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod block;
pub mod record;
pub mod table;
pub mod traits;

// Re-exports for convenience
pub use block::TextBlock;
pub use record::{CandidateRecord, PeriodSource, RecordSchema, ScoredRecord, ValidatedRecord};
pub use table::FinalTable;
