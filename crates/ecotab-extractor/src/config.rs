//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Language of the source documents, selecting the default lexicon and prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// French reports (the historical default)
    #[default]
    French,
    /// English reports
    English,
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum block width in characters; a single longer word still gets its own block
    pub max_block_chars: usize,

    /// Records scoring below this are dropped by the quality filter
    pub min_quality_score: i32,

    /// Shortest accepted indicator (characters)
    pub min_indicator_chars: usize,

    /// Shortest accepted source sentence (characters)
    pub min_sentence_chars: usize,

    /// Per-block generation timeout (seconds); unset means wait indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_timeout_secs: Option<u64>,

    /// Document language
    #[serde(default)]
    pub language: Language,
}

impl ExtractorConfig {
    /// Get the generation timeout as a Duration, if one is set
    pub fn generation_timeout(&self) -> Option<Duration> {
        self.generation_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_block_chars == 0 {
            return Err("max_block_chars must be greater than 0".to_string());
        }
        if self.generation_timeout_secs == Some(0) {
            return Err("generation_timeout_secs must be greater than 0 when set".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Thresholds the extraction was tuned with
    fn default() -> Self {
        Self {
            max_block_chars: 1500,
            min_quality_score: 2,
            min_indicator_chars: 3,
            min_sentence_chars: 20,
            generation_timeout_secs: None,
            language: Language::French,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: higher score bar and longer sentences required
    pub fn strict() -> Self {
        Self {
            min_quality_score: 3,
            min_sentence_chars: 30,
            ..Self::default()
        }
    }

    /// Lenient preset: larger blocks, any positive score kept
    pub fn lenient() -> Self {
        Self {
            max_block_chars: 3000,
            min_quality_score: 1,
            min_sentence_chars: 10,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
