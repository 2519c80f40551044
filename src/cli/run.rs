//! Command execution against the service.

use std::path::Path;

use super::commands::Command;
use super::help::help_text;
use super::output_types::{CommandOutput, GenerationOutput, StatsOutput, GENERATION_SAMPLE_SIZE};
use crate::error::{AppError, StorageError};
use crate::service::BiasService;
use crate::traits::{Embedder, TimeProvider};

/// Execute a parsed command.
///
/// `generate` and `evaluate` start from the persisted corpus when one
/// exists, so successive runs accumulate into the same file.
///
/// # Errors
///
/// Returns [`AppError`] if the underlying service operation fails.
pub async fn execute<E, T>(
    service: &BiasService<E, T>,
    command: Command,
) -> Result<CommandOutput, AppError>
where
    E: Embedder,
    T: TimeProvider + Clone,
{
    match command {
        Command::Detect { text } => Ok(CommandOutput::Detection(
            service.detect_biases(&text).await?,
        )),

        Command::Correct { text, biases } => Ok(CommandOutput::Correction(
            service.correct_text(&text, &biases).await?,
        )),

        Command::Analyze { text } => Ok(CommandOutput::Analysis(service.analyze(&text).await?)),

        Command::Generate { count, save, .. } => {
            let path = service.corpus_path();
            if save {
                load_existing(service, &path).await?;
            }

            let report = service.generate_examples(count).await;
            let saved_to = if save {
                service.save_corpus(&path).await?;
                Some(path.display().to_string())
            } else {
                None
            };

            Ok(CommandOutput::Generation(GenerationOutput {
                count: report.examples.len(),
                total: report.total,
                sample: report
                    .examples
                    .into_iter()
                    .take(GENERATION_SAMPLE_SIZE)
                    .collect(),
                saved_to,
            }))
        }

        Command::Stats => Ok(CommandOutput::Stats(StatsOutput {
            corpus_path: service.corpus_path().display().to_string(),
            metrics: service.corpus_stats().await?,
        })),

        Command::Evaluate => {
            load_existing(service, &service.corpus_path()).await?;
            Ok(CommandOutput::Evaluation(service.evaluate_corpus().await?))
        }

        Command::Help => Ok(CommandOutput::Help(help_text())),
    }
}

async fn load_existing<E, T>(service: &BiasService<E, T>, path: &Path) -> Result<(), StorageError>
where
    E: Embedder,
    T: TimeProvider + Clone,
{
    match service.load_corpus(path).await {
        Ok(_) => Ok(()),
        Err(e) if e.is_not_found() => {
            tracing::debug!(path = %path.display(), "Starting a new corpus");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
