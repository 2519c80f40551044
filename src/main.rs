//! bias-lens binary entry point.
//!
//! All logs go to stderr; stdout carries the JSON result of the command.
//!
//! Coverage is excluded because the main function only wires process
//! arguments and environment into the library.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use bias_lens::cli::{execute, help_text, Command};
use bias_lens::config::{Config, DEFAULT_LOG_LEVEL};
use bias_lens::service::BiasService;

/// Initialize logging to stderr only (stdout is for command output).
#[cfg_attr(coverage_nightly, coverage(off))]
fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            log_level
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    // Config loads .env, so it comes first to pick up LOG_LEVEL from there
    let config = Config::from_env();
    init_tracing(
        config
            .as_ref()
            .map_or(DEFAULT_LOG_LEVEL, |config| config.log_level.as_str()),
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{}", help_text());
            std::process::exit(1);
        }
    };

    if command == Command::Help {
        println!("{}", help_text());
        return;
    }

    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    if let Some(seed) = command.seed() {
        config.generator_seed = Some(seed);
    }

    tracing::info!(
        corpus = %config.corpus_path,
        threshold = config.semantic_threshold,
        remote_embedder = config.embedding_url.is_some(),
        "Configuration loaded"
    );

    let service = match BiasService::from_config(config) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Startup error: {e}");
            std::process::exit(1);
        }
    };

    let output = match execute(&service, command).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!("Failed to encode output: {e}");
            std::process::exit(1);
        }
    }
}
