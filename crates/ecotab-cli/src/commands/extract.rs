//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::{Config, ProviderSettings};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::provider::AnyProvider;
use ecotab_extractor::{ExtractionRequest, ExtractionResult, Extractor, ExtractorConfig, Lexicon};
use std::fs;
use std::path::Path;
use tracing::info;

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let result = run_extraction(&args, config).await?;

    println!("{}", formatter.format_result(&result));

    if result.table.is_empty() {
        println!("{}", formatter.warning("No indicator survived validation"));
    } else {
        println!(
            "{}",
            formatter.success(&format!("Extracted {} indicators", result.table.len()))
        );
    }

    Ok(())
}

/// Read the input file, build the pipeline and run it.
pub async fn run_extraction(args: &ExtractArgs, config: &Config) -> Result<ExtractionResult> {
    let text = fs::read_to_string(&args.file)?;
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput(format!(
            "{} contains no text",
            args.file.display()
        )));
    }

    let extractor_config = extractor_config(args, &config.extractor);
    let lexicon = match &args.lexicon {
        Some(path) => load_lexicon(path)?,
        None => Lexicon::for_language(extractor_config.language),
    };

    let settings = provider_settings(args, &config.provider);
    let provider = AnyProvider::from_settings(&settings, args.api_key.as_deref())?;
    info!(
        "Using {} provider with model {}",
        settings.kind.as_str(),
        ecotab_domain::traits::LlmProvider::model_name(&provider)
    );

    let extractor = Extractor::with_lexicon(provider, extractor_config, lexicon)?;
    let source_id = args.source_id.clone().unwrap_or_else(|| source_name(&args.file));

    Ok(extractor
        .extract(ExtractionRequest::new(text, source_id))
        .await?)
}

/// Provider settings with command-line overrides applied.
fn provider_settings(args: &ExtractArgs, base: &ProviderSettings) -> ProviderSettings {
    let mut settings = base.clone();
    if let Some(provider) = args.provider {
        settings.kind = provider.into();
    }
    if let Some(model) = &args.model {
        settings.model = Some(model.clone());
    }
    if let Some(endpoint) = &args.endpoint {
        settings.endpoint = Some(endpoint.clone());
    }
    settings
}

/// Extractor thresholds: config file, then preset, then individual flags.
fn extractor_config(args: &ExtractArgs, base: &ExtractorConfig) -> ExtractorConfig {
    let mut config = match args.preset {
        Some(preset) => preset.apply(base),
        None => base.clone(),
    };
    if let Some(language) = args.language {
        config.language = language.into();
    }
    if let Some(max) = args.max_block_chars {
        config.max_block_chars = max;
    }
    if let Some(min) = args.min_score {
        config.min_quality_score = min;
    }
    if let Some(secs) = args.timeout {
        config.generation_timeout_secs = Some(secs);
    }
    config
}

fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let contents = fs::read_to_string(path)?;
    Lexicon::from_toml(&contents).map_err(CliError::Config)
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
