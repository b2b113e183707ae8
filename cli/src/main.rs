//! CLI entrypoint for Note Scout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use scout_application::{
    GatewaySet, NoProgress, ProgressNotifier, ResearchEngine, RunLogger,
};
use scout_domain::Category;
use scout_infrastructure::{
    AnthropicGateway, ConfigLoader, FileConfig, JsonlRunLogger, OpenAiGateway,
    research_completed_event,
};
use scout_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if cli.check_config {
        if issues.is_empty() {
            println!("Configuration OK");
            return Ok(());
        }
        for issue in &issues {
            println!("  ! {}", issue);
        }
        bail!("{} configuration issue(s) found", issues.len());
    }
    for issue in &issues {
        warn!("config: {}", issue);
    }

    // Read the note text
    let note_text = match (&cli.note, &cli.file) {
        (Some(text), None) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read note from {}", path.display()))?,
        (Some(_), Some(_)) => bail!("pass the note text or --file, not both"),
        (None, None) => bail!("a note is required, either as an argument or via --file"),
    };

    // Category: explicit flag wins, otherwise keyword detection
    let category = match &cli.category {
        Some(value) => value.parse().expect("category parsing is infallible"),
        None => Category::detect(&note_text),
    };
    info!("note category: {}", category);

    let engine = build_engine(&config)?;

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let outcome = engine
        .research_with_progress(&note_text, category, cli.approach.as_deref(), &*progress)
        .await;

    // Record the run before rendering, so failed renders still leave a trace
    if let Some(path) = &config.logging.run_log
        && let Some(logger) = JsonlRunLogger::new(path)
    {
        logger.log(research_completed_event(cli.note_id.as_deref(), &outcome));
    }

    let rendered = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&outcome),
        OutputFormat::Synthesis => ConsoleFormatter::format_synthesis_only(&outcome),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
    };
    println!("{}", rendered);

    if !outcome.success {
        std::process::exit(1);
    }

    Ok(())
}

/// Wire the provider adapters into a research engine.
///
/// Both Anthropic roles share one HTTP client; the contrasting perspective
/// comes from OpenAI so single-pass research never leans on one vendor.
fn build_engine(config: &FileConfig) -> Result<ResearchEngine> {
    let Some(anthropic_key) = config.providers.anthropic_api_key.clone() else {
        bail!("ANTHROPIC_API_KEY is required");
    };
    let Some(openai_key) = config.providers.openai_api_key.clone() else {
        bail!("OPENAI_API_KEY is required");
    };

    let client = reqwest::Client::new();

    let gateways = GatewaySet::new(
        Arc::new(AnthropicGateway::new(
            client.clone(),
            anthropic_key.clone(),
            config.providers.analysis_model.clone(),
        )),
        Arc::new(AnthropicGateway::new(
            client.clone(),
            anthropic_key,
            config.providers.research_model.clone(),
        )),
        Arc::new(OpenAiGateway::new(
            client,
            openai_key,
            config.providers.contrast_model.clone(),
        )),
    );

    Ok(ResearchEngine::new(gateways, config.research.clone()))
}
