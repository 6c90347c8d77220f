//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::finalize::finalize;
use crate::lexicon::Lexicon;
use crate::parser::ResponseParser;
use crate::period::PeriodCascade;
use crate::prompt::PromptBuilder;
use crate::scoring::QualityScorer;
use crate::segmenter::{normalize_whitespace, TextSegmenter};
use crate::summary::summarize;
use crate::types::{BlockFailure, ExtractionMetadata, ExtractionRequest, ExtractionResult};
use crate::validator::{FieldValidator, ValidationRules};
use ecotab_domain::traits::LlmProvider;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The Extractor turns document text into a validated indicator table
///
/// Blocks are processed strictly in order: block `i + 1` is only sent once
/// block `i` has been generated, parsed and validated.
pub struct Extractor<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: ExtractorConfig,
    lexicon: Lexicon,
    segmenter: TextSegmenter,
    parser: ResponseParser,
    scorer: QualityScorer,
}

impl<L> Extractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Extractor using the lexicon for the configured language
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        let lexicon = Lexicon::for_language(config.language);
        Self::with_lexicon(llm_provider, config, lexicon)
    }

    /// Create a new Extractor with a custom lexicon
    pub fn with_lexicon(
        llm_provider: L,
        config: ExtractorConfig,
        lexicon: Lexicon,
    ) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let validator = FieldValidator::new(
            &lexicon,
            ValidationRules {
                min_indicator_chars: config.min_indicator_chars,
                min_sentence_chars: config.min_sentence_chars,
            },
        )?;
        let periods = PeriodCascade::new(&lexicon.periods)?;

        Ok(Self {
            llm_provider: Arc::new(llm_provider),
            segmenter: TextSegmenter::new(config.max_block_chars),
            parser: ResponseParser::new(validator, periods),
            scorer: QualityScorer::new(&lexicon, config.min_quality_score),
            config,
            lexicon,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Active lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Extract indicators from a document
    pub async fn extract(
        &self,
        request: ExtractionRequest,
    ) -> Result<ExtractionResult, ExtractorError> {
        let start_time = Instant::now();

        if request.text.trim().is_empty() {
            return Err(ExtractorError::EmptyInput);
        }

        let text = normalize_whitespace(&request.text);

        let blocks = self.segmenter.segment(&text);
        info!(
            "Starting extraction for source '{}': {} chars in {} blocks",
            request.source_id,
            text.chars().count(),
            blocks.len()
        );

        let mut records = Vec::new();
        let mut failures = Vec::new();
        let mut lines_skipped = 0;
        let mut candidates_rejected = 0;

        for block in &blocks {
            debug!(
                "Processing block {}/{} ({} chars)",
                block.index() + 1,
                blocks.len(),
                block.char_len()
            );

            let prompt = PromptBuilder::new(block.text(), self.config.language).build();
            let response = match self.generate(prompt).await {
                Ok(response) => response,
                Err(e) => {
                    warn!("Generation failed for block {}: {}", block.index(), e);
                    failures.push(BlockFailure {
                        block_index: block.index(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let outcome = self.parser.parse(&response);
            debug!(
                "Block {}: {} records, {} lines skipped, {} rejected",
                block.index(),
                outcome.records.len(),
                outcome.lines_skipped,
                outcome.candidates_rejected
            );

            lines_skipped += outcome.lines_skipped;
            candidates_rejected += outcome.candidates_rejected;
            records.extend(outcome.records);
        }

        let records_validated = records.len();
        let retained = self.scorer.filter(records);
        let records_retained = retained.len();
        debug!(
            "Quality filter kept {}/{} records (min score {})",
            records_retained,
            records_validated,
            self.scorer.min_score()
        );

        let report = finalize(retained);
        let summary = summarize(&report.table, &self.lexicon);

        let metadata = ExtractionMetadata {
            source_id: request.source_id,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default(),
            model_name: self.llm_provider.model_name().to_string(),
            blocks_total: blocks.len(),
            blocks_failed: failures.len(),
            lines_skipped,
            candidates_rejected,
            records_validated,
            records_retained,
            duplicates_removed: report.duplicates_removed,
            duplicate_rate: report.duplicate_rate(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Extraction complete: {} rows, {} duplicates removed, {} blocks failed",
            report.table.len(),
            report.duplicates_removed,
            failures.len()
        );

        Ok(ExtractionResult {
            table: report.table,
            summary,
            failures,
            metadata,
        })
    }

    /// Run one generation call, bounded by the optional timeout
    ///
    /// A call that outlives the timeout is still awaited before returning, so
    /// the next block never overlaps it. Its late answer is discarded.
    async fn generate(&self, prompt: String) -> Result<String, ExtractorError> {
        let mut handle = self.spawn_call(prompt);
        let Some(limit) = self.config.generation_timeout() else {
            return joined(handle.await);
        };

        match timeout(limit, &mut handle).await {
            Ok(result) => joined(result),
            Err(_) => {
                debug!("Generation exceeded {:?}, waiting for the call to finish", limit);
                let _ = handle.await;
                Err(ExtractorError::Timeout)
            }
        }
    }

    /// Call the LLM provider on the blocking pool
    fn spawn_call(&self, prompt: String) -> JoinHandle<Result<String, ExtractorError>> {
        let llm = Arc::clone(&self.llm_provider);

        // LlmProvider is not async
        tokio::task::spawn_blocking(move || {
            llm.generate(&prompt)
                .map_err(|e| ExtractorError::Llm(e.to_string()))
        })
    }
}

fn joined(
    result: Result<Result<String, ExtractorError>, JoinError>,
) -> Result<String, ExtractorError> {
    result.map_err(|e| ExtractorError::Llm(format!("Task join error: {}", e)))?
}
