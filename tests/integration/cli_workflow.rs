//! CLI workflow: generate → stats → evaluate against one corpus file.
//!
//! Each step builds a fresh service, the way separate process runs would.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use bias_lens::cli::{execute, Command, CommandOutput};
use bias_lens::config::{BiasContext, Config};
use bias_lens::embedding::HashingEmbedder;
use bias_lens::service::BiasService;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn run_args(items: &[&str]) -> Command {
    let args: Vec<String> = items.iter().map(|s| (*s).to_string()).collect();
    Command::parse(&args).expect("Failed to parse command")
}

fn service_for(dir: &TempDir, command: &Command) -> BiasService<HashingEmbedder> {
    let mut config = Config::default();
    config.corpus_path = dir.path().join("data/corpus.json").display().to_string();
    config.generator_seed = command.seed();
    BiasService::new(
        BiasContext::new(config).expect("Invalid test config"),
        HashingEmbedder::default(),
    )
}

async fn run(dir: &TempDir, items: &[&str]) -> serde_json::Value {
    let command = run_args(items);
    let service = service_for(dir, &command);
    let output = execute(&service, command).await.expect("Command failed");
    serde_json::to_value(&output).expect("Output must serialize")
}

#[tokio::test]
async fn test_generate_stats_evaluate() {
    let dir = TempDir::new().unwrap();

    let generated = run(&dir, &["generate", "20", "--seed", "9"]).await;
    assert_eq!(generated["count"], 20);
    assert_eq!(generated["total"], 20);
    assert_eq!(generated["sample"].as_array().unwrap().len(), 10);
    assert!(dir.path().join("data/corpus.json").exists());

    let stats = run(&dir, &["stats"]).await;
    assert_eq!(stats["total_examples"], 20);
    let per_kind: u64 = stats["bias_distribution"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(per_kind, 20);

    let evaluation = run(&dir, &["eval"]).await;
    assert_eq!(evaluation["total_examples"], 20);
}

#[tokio::test]
async fn test_repeated_generate_accumulates() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["gen", "5", "-s", "1"]).await;
    let second = run(&dir, &["gen", "7", "-s", "2"]).await;
    assert_eq!(second["count"], 7);
    assert_eq!(second["total"], 12);

    let stats = run(&dir, &["stats"]).await;
    assert_eq!(stats["total_examples"], 12);
}

#[tokio::test]
async fn test_no_save_leaves_stats_empty() {
    let dir = TempDir::new().unwrap();
    let generated = run(&dir, &["generate", "4", "--no-save"]).await;
    assert!(generated["saved_to"].is_null());

    let stats = run(&dir, &["stats"]).await;
    assert_eq!(stats["total_examples"], 0);
}

#[tokio::test]
async fn test_analyze_output_shape() {
    let dir = TempDir::new().unwrap();
    let command = run_args(&["analyze", "Everyone", "knows", "it", "always", "works"]);
    let service = service_for(&dir, &command);

    match execute(&service, command).await.unwrap() {
        CommandOutput::Analysis(report) => {
            assert!(report.detection.has_biases());
            let correction = report.correction.expect("biased text must be corrected");
            assert_eq!(correction.original, "Everyone knows it always works");
        }
        other => unreachable!("unexpected output: {other:?}"),
    }
}
