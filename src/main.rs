use clap::Parser;
use record_profiler::adapters::FileSink;
use record_profiler::config::{CliConfig, TomlConfig};
use record_profiler::core::analyzer;
use record_profiler::core::engine::ExportEngine;
use record_profiler::utils::{logger, validation::Validate};
use serde_json::{json, Value};

// Same shape the tool was written around: contentId/count pairs.
fn sample_collection() -> Value {
    json!([
        { "contentId": "content-123", "count": 1 },
        { "contentId": "content-456", "count": 2 },
        { "contentId": "content-789", "count": 1 }
    ])
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting record-profiler CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let input: Value = match &config.input {
        Some(path) => {
            tracing::info!("Reading input collection from {}", path);
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
        None => {
            tracing::warn!("No input file given, using the built-in sample collection");
            sample_collection()
        }
    };

    if config.list_only {
        let properties = analyzer::list_properties(Some(&input));
        println!("📋 Found {} unique properties: {:?}", properties.len(), properties);
        return Ok(());
    }

    let mut options = config.export_options();
    if let Some(path) = &config.config {
        let file_config = TomlConfig::from_file(path)?;
        options = file_config.apply(options);
        tracing::debug!("Effective export options after {}: {:?}", path, options);
    }

    let sink = FileSink::new(&config.output_path);
    let engine = ExportEngine::new(sink);

    let outcome = engine.export_custom(Some(&input), &options);
    if !outcome.success {
        eprintln!(
            "❌ Export failed: {}",
            outcome.error.as_deref().unwrap_or("unknown error")
        );
        std::process::exit(1);
    }

    Ok(())
}
