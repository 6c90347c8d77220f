//! Ecotab Extractor
//!
//! Turns unstructured economic report text into a validated table of
//! indicators.
//!
//! # Overview
//!
//! Semantic extraction is delegated to a text-generation service; everything
//! after the generation call is deterministic. Each response line is parsed,
//! validated against economic-domain keyword rules, given a period, scored for
//! relevance, and finally deduplicated and sorted.
//!
//! # Architecture
//!
//! ```text
//! Text → Segmenter → Blocks → LLM → Response Parser
//!      → Field Validator (+ Period Cascade) → Quality Filter
//!      → Dedup/Sort → FinalTable
//! ```
//!
//! Every keyword list and temporal vocabulary the pipeline consults lives in a
//! [`Lexicon`]. Thresholds live in [`ExtractorConfig`].
//!
//! # Example Usage
//!
//! ```no_run
//! use ecotab_extractor::{Extractor, ExtractorConfig, ExtractionRequest};
//! use ecotab_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(
//!     "PIB national|4,2%|Q1 2025|Le PIB national a progressé de 4,2% au premier trimestre 2025",
//! );
//! let extractor = Extractor::new(llm, ExtractorConfig::default())?;
//!
//! let request = ExtractionRequest::new(
//!     "Le PIB national a progressé de 4,2% au premier trimestre 2025.",
//!     "bulletin_t1",
//! );
//! let result = extractor.extract(request).await?;
//!
//! for row in &result.table {
//!     println!("{} | {} | {}", row.indicator, row.value, row.period);
//! }
//! println!("Duplicates: {:.1}%", result.metadata.duplicate_rate * 100.0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod finalize;
mod lexicon;
mod parser;
mod period;
mod prompt;
mod scoring;
mod segmenter;
mod summary;
mod types;
mod validator;


pub use config::{ExtractorConfig, Language};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use finalize::{finalize, FinalizeReport};
pub use lexicon::{CategoryRule, Lexicon, PeriodVocabulary};
pub use parser::{parse_candidates, parse_line, ParseOutcome, ResponseParser};
pub use period::{PeriodCascade, PeriodFamily, PeriodMatch};
pub use prompt::PromptBuilder;
pub use scoring::QualityScorer;
pub use segmenter::{normalize_whitespace, TextSegmenter};
pub use summary::{categorize, summarize, CategoryCount, TableSummary};
pub use types::{BlockFailure, ExtractionMetadata, ExtractionRequest, ExtractionResult};
pub use validator::{FieldValidator, RejectionReason, ValidationRules};
