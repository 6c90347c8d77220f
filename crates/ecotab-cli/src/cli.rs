//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use ecotab_extractor::{ExtractorConfig, Language};
use std::path::PathBuf;

/// Ecotab CLI - Extract economic indicators from report text.
#[derive(Debug, Parser)]
#[command(name = "ecotab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log pipeline details (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Indicator table followed by the summary (default)
    Table,
    /// Summary and run statistics only
    Summary,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract indicators from a UTF-8 text file
    Extract(ExtractArgs),

    /// Inspect or initialize the configuration file
    Config(ConfigArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Text file produced by an upstream PDF/OCR extractor
    pub file: PathBuf,

    /// Generation provider (overrides the config file)
    #[arg(short, long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// Model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// Provider endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Document language
    #[arg(short, long, value_enum)]
    pub language: Option<LanguageArg>,

    /// Threshold preset, applied before the individual overrides below
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Maximum block width in characters
    #[arg(long)]
    pub max_block_chars: Option<usize>,

    /// Minimum quality score
    #[arg(long)]
    pub min_score: Option<i32>,

    /// Per-block generation timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Custom lexicon TOML file
    #[arg(long)]
    pub lexicon: Option<PathBuf>,

    /// Source identifier recorded in the run metadata (defaults to the file name)
    #[arg(long)]
    pub source_id: Option<String>,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the built-in lexicon for a language as TOML
    Lexicon {
        /// Lexicon language
        #[arg(value_enum, default_value = "french")]
        language: LanguageArg,
    },
}

/// Provider argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ProviderArg {
    /// Offline provider returning no lines (dry run)
    Mock,
    /// Local Ollama server
    Ollama,
    /// Groq hosted API
    Groq,
}

/// Language argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LanguageArg {
    /// French reports
    French,
    /// English reports
    English,
}

/// Threshold preset argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PresetArg {
    /// Default thresholds
    Default,
    /// Higher score bar, longer sentences
    Strict,
    /// Larger blocks, any positive score
    Lenient,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Summary => crate::config::OutputFormat::Summary,
        }
    }
}

impl From<ProviderArg> for crate::config::ProviderKind {
    fn from(provider: ProviderArg) -> Self {
        match provider {
            ProviderArg::Mock => crate::config::ProviderKind::Mock,
            ProviderArg::Ollama => crate::config::ProviderKind::Ollama,
            ProviderArg::Groq => crate::config::ProviderKind::Groq,
        }
    }
}

impl From<LanguageArg> for Language {
    fn from(language: LanguageArg) -> Self {
        match language {
            LanguageArg::French => Language::French,
            LanguageArg::English => Language::English,
        }
    }
}

impl PresetArg {
    /// Thresholds for this preset, keeping the language and timeout of `base`
    pub fn apply(self, base: &ExtractorConfig) -> ExtractorConfig {
        let preset = match self {
            PresetArg::Default => ExtractorConfig::default(),
            PresetArg::Strict => ExtractorConfig::strict(),
            PresetArg::Lenient => ExtractorConfig::lenient(),
        };
        ExtractorConfig {
            language: base.language,
            generation_timeout_secs: base.generation_timeout_secs,
            ..preset
        }
    }
}
