//! CLI entrypoint for Laughing Lemur
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use lemur_application::{GenerateCombosInput, GenerateCombosUseCase};
use lemur_domain::{Letter, ListSize, OutputFormat};
use lemur_infrastructure::{ConfigLoader, DatamuseConfig, DatamuseWordSource};
use lemur_presentation::{Cli, ConsoleFormatter};
use std::sync::Arc;
use tracing::{debug, info};
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
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;
    debug!("Loaded configuration: {:?}", config);

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // === Input validation ===
    let letter = Letter::parse(cli.letter.as_deref().unwrap_or_default())?;
    let size = match cli.list {
        Some(n) => ListSize::try_from(n)?,
        None => ListSize::default(),
    };

    info!("Generating {} alliteration(s) for '{}'", size, letter);

    // === Dependency Injection ===
    let source = Arc::new(DatamuseWordSource::new(DatamuseConfig::from(
        &config.word_source,
    ))?);
    let use_case = GenerateCombosUseCase::new(source);

    let output = use_case
        .execute(GenerateCombosInput::new(letter).with_size(size))
        .await?;

    match format {
        OutputFormat::Text => print!("{}", ConsoleFormatter::format(&output, cli.show)),
        OutputFormat::Json => println!(
            "{}",
            ConsoleFormatter::format_json(&output, cli.show)
                .context("Failed to serialize output as JSON")?
        ),
    }

    Ok(())
}
