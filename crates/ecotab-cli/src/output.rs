//! Output formatting for the CLI.

use crate::config::OutputFormat;
use colored::*;
use ecotab_domain::FinalTable;
use ecotab_extractor::{ExtractionResult, TableSummary};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Sentences longer than this are shortened in the table view
const SENTENCE_PREVIEW_CHARS: usize = 80;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a complete extraction result.
    pub fn format_result(&self, result: &ExtractionResult) -> String {
        let mut sections = Vec::new();
        if self.format == OutputFormat::Table {
            sections.push(self.format_table(&result.table));
        }
        sections.push(self.format_summary(&result.summary));
        sections.push(self.format_run(result));
        sections.join("\n\n")
    }

    /// Format the indicator table.
    pub fn format_table(&self, table: &FinalTable) -> String {
        if table.is_empty() {
            return self.colorize("No indicators found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Indicator", "Value", "Period", "Sentence"]);

        for row in table {
            builder.push_record([
                row.indicator.as_str(),
                row.value.as_str(),
                row.period.as_str(),
                &preview(&row.sentence, SENTENCE_PREVIEW_CHARS),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the table summary.
    pub fn format_summary(&self, summary: &TableSummary) -> String {
        let mut lines = vec![
            self.colorize("Summary", "cyan"),
            format!("  Indicators:          {}", summary.total_rows),
            format!("  Distinct indicators: {}", summary.distinct_indicators),
            format!(
                "  Dominant period:     {}",
                summary.dominant_period.as_deref().unwrap_or("-")
            ),
            format!(
                "  Dominant category:   {}",
                summary.dominant_category.as_deref().unwrap_or("-")
            ),
        ];

        if !summary.categories.is_empty() {
            lines.push("  Categories:".to_string());
            for category in &summary.categories {
                lines.push(format!("    {:<24} {}", category.label, category.count));
            }
        }

        lines.join("\n")
    }

    /// Format run statistics and block failures.
    pub fn format_run(&self, result: &ExtractionResult) -> String {
        let meta = &result.metadata;
        let mut lines = vec![
            self.info(&format!(
                "{} blocks via {} in {} ms",
                meta.blocks_total, meta.model_name, meta.processing_time_ms
            )),
            format!(
                "  {} validated, {} rejected, {} lines skipped",
                meta.records_validated, meta.candidates_rejected, meta.lines_skipped
            ),
            format!(
                "  {} kept by quality filter, {} duplicates removed ({:.1}%)",
                meta.records_retained,
                meta.duplicates_removed,
                meta.duplicate_rate * 100.0
            ),
        ];

        for failure in &result.failures {
            lines.push(self.warning(&format!(
                "Block {} produced no records: {}",
                failure.block_index, failure.reason
            )));
        }

        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with an ellipsis
fn preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}
