//! Tests for CLI module.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::commands::{Command, DEFAULT_GENERATE_COUNT};
use super::errors::CommandParseError;
use super::help::help_text;
use super::output_types::*;
use super::run::execute;
use crate::catalog::BiasKind;
use crate::config::{BiasContext, Config};
use crate::embedding::HashingEmbedder;
use crate::error::AppError;
use crate::service::BiasService;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn service_at(dir: &TempDir, seed: u64) -> BiasService<HashingEmbedder> {
    let mut config = Config::default();
    config.corpus_path = dir.path().join("corpus.json").display().to_string();
    config.generator_seed = Some(seed);
    BiasService::new(BiasContext::new(config).unwrap(), HashingEmbedder::default())
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_missing_command() {
    assert_eq!(Command::parse(&[]), Err(CommandParseError::MissingCommand));
}

#[test]
fn test_parse_unknown_command() {
    assert_eq!(
        Command::parse(&args(&["Frobnicate"])),
        Err(CommandParseError::UnknownCommand("frobnicate".into()))
    );
}

#[test]
fn test_parse_detect_joins_words() {
    let cmd = Command::parse(&args(&["detect", "It", "always", "works"])).unwrap();
    assert_eq!(
        cmd,
        Command::Detect {
            text: "It always works".into()
        }
    );
}

#[test]
fn test_parse_detect_requires_text() {
    assert_eq!(
        Command::parse(&args(&["detect"])),
        Err(CommandParseError::MissingValue("text".into()))
    );
    assert_eq!(
        Command::parse(&args(&["analyze", "  "])),
        Err(CommandParseError::MissingValue("text".into()))
    );
}

#[test]
fn test_parse_correct_with_biases() {
    let cmd = Command::parse(&args(&[
        "correct",
        "It will definitely work",
        "--biases",
        "groupthink, recency_bias",
    ]))
    .unwrap();
    assert_eq!(
        cmd,
        Command::Correct {
            text: "It will definitely work".into(),
            biases: vec![BiasKind::Groupthink, BiasKind::RecencyBias],
        }
    );
}

#[test]
fn test_parse_correct_without_biases() {
    let cmd = Command::parse(&args(&["correct", "text"])).unwrap();
    assert!(matches!(cmd, Command::Correct { biases, .. } if biases.is_empty()));
}

#[test]
fn test_parse_correct_unknown_kind() {
    assert_eq!(
        Command::parse(&args(&["correct", "text", "-b", "halo_effect"])),
        Err(CommandParseError::InvalidValue {
            flag: "--biases".into(),
            value: "halo_effect".into(),
        })
    );
}

#[test]
fn test_parse_correct_missing_biases_value() {
    assert_eq!(
        Command::parse(&args(&["correct", "text", "--biases"])),
        Err(CommandParseError::MissingValue("--biases".into()))
    );
}

#[test]
fn test_parse_correct_unknown_flag() {
    assert_eq!(
        Command::parse(&args(&["correct", "text", "--fast"])),
        Err(CommandParseError::UnknownFlag("--fast".into()))
    );
}

#[test]
fn test_parse_generate_defaults() {
    let cmd = Command::parse(&args(&["generate"])).unwrap();
    assert_eq!(
        cmd,
        Command::Generate {
            count: DEFAULT_GENERATE_COUNT,
            seed: None,
            save: true,
        }
    );
    assert_eq!(cmd.seed(), None);
}

#[test]
fn test_parse_generate_with_options() {
    let cmd = Command::parse(&args(&["gen", "250", "--seed", "42", "--no-save"])).unwrap();
    assert_eq!(
        cmd,
        Command::Generate {
            count: 250,
            seed: Some(42),
            save: false,
        }
    );
    assert_eq!(cmd.seed(), Some(42));
}

#[test]
fn test_parse_generate_invalid_count() {
    assert_eq!(
        Command::parse(&args(&["generate", "many"])),
        Err(CommandParseError::InvalidValue {
            flag: "count".into(),
            value: "many".into(),
        })
    );
}

#[test]
fn test_parse_generate_invalid_seed() {
    assert!(matches!(
        Command::parse(&args(&["generate", "5", "-s", "x"])),
        Err(CommandParseError::InvalidValue { .. })
    ));
}

#[test]
fn test_parse_simple_commands() {
    assert_eq!(Command::parse(&args(&["stats"])).unwrap(), Command::Stats);
    assert_eq!(Command::parse(&args(&["eval"])).unwrap(), Command::Evaluate);
    assert_eq!(Command::parse(&args(&["--help"])).unwrap(), Command::Help);
    assert_eq!(Command::parse(&args(&["HELP"])).unwrap(), Command::Help);
}

#[test]
fn test_error_display() {
    assert_eq!(
        CommandParseError::UnknownFlag("--x".into()).to_string(),
        "Unknown flag: '--x'"
    );
    assert_eq!(
        CommandParseError::InvalidValue {
            flag: "count".into(),
            value: "many".into()
        }
        .to_string(),
        "Invalid value 'many' for 'count'"
    );
}

#[test]
fn test_help_mentions_every_command() {
    let help = help_text();
    for cmd in ["detect", "correct", "analyze", "generate", "stats", "evaluate"] {
        assert!(help.contains(cmd), "{cmd}");
    }
}

// ============================================================================
// Execution
// ============================================================================

#[tokio::test]
async fn test_execute_detect() {
    let dir = TempDir::new().unwrap();
    let service = service_at(&dir, 1);
    let output = execute(
        &service,
        Command::Detect {
            text: "Everyone knows it always works".into(),
        },
    )
    .await
    .unwrap();
    match output {
        CommandOutput::Detection(result) => {
            assert!(result.biases_detected.contains(&BiasKind::ConfirmationBias));
        }
        other => unreachable!("unexpected output: {other:?}"),
    }
}

#[tokio::test]
async fn test_execute_detect_empty_is_error() {
    let dir = TempDir::new().unwrap();
    let service = service_at(&dir, 1);
    let err = execute(&service, Command::Detect { text: " ".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Detect(_)));
}

#[tokio::test]
async fn test_execute_generate_saves_and_accumulates() {
    let dir = TempDir::new().unwrap();
    let generate = Command::Generate {
        count: 15,
        seed: None,
        save: true,
    };

    let first = execute(&service_at(&dir, 1), generate.clone()).await.unwrap();
    match first {
        CommandOutput::Generation(out) => {
            assert_eq!(out.count, 15);
            assert_eq!(out.total, 15);
            assert_eq!(out.sample.len(), GENERATION_SAMPLE_SIZE);
            assert!(out.saved_to.is_some());
        }
        other => unreachable!("unexpected output: {other:?}"),
    }

    // A fresh service picks up the saved corpus before appending
    let second = execute(&service_at(&dir, 2), generate).await.unwrap();
    match second {
        CommandOutput::Generation(out) => assert_eq!(out.total, 30),
        other => unreachable!("unexpected output: {other:?}"),
    }
}

#[tokio::test]
async fn test_execute_generate_no_save() {
    let dir = TempDir::new().unwrap();
    let service = service_at(&dir, 1);
    let output = execute(
        &service,
        Command::Generate {
            count: 3,
            seed: None,
            save: false,
        },
    )
    .await
    .unwrap();
    assert!(matches!(output, CommandOutput::Generation(ref out) if out.saved_to.is_none()));
    assert!(!dir.path().join("corpus.json").exists());
}

#[tokio::test]
async fn test_execute_stats_without_corpus() {
    let dir = TempDir::new().unwrap();
    let output = execute(&service_at(&dir, 1), Command::Stats).await.unwrap();
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["total_examples"], 0);
    assert!(json["corpus_path"].as_str().unwrap().ends_with("corpus.json"));
}

#[tokio::test]
async fn test_execute_evaluate_reads_corpus() {
    let dir = TempDir::new().unwrap();
    execute(
        &service_at(&dir, 4),
        Command::Generate {
            count: 12,
            seed: None,
            save: true,
        },
    )
    .await
    .unwrap();

    let output = execute(&service_at(&dir, 5), Command::Evaluate).await.unwrap();
    match output {
        CommandOutput::Evaluation(report) => assert_eq!(report.total_examples, 12),
        other => unreachable!("unexpected output: {other:?}"),
    }
}

#[tokio::test]
async fn test_execute_help() {
    let dir = TempDir::new().unwrap();
    let output = execute(&service_at(&dir, 1), Command::Help).await.unwrap();
    assert!(matches!(output, CommandOutput::Help(text) if text == help_text()));
}
