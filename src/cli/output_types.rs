//! Output types for CLI commands.

use serde::Serialize;

use crate::correct::CorrectionResult;
use crate::detect::DetectionResult;
use crate::metrics::{CorpusMetrics, EvaluationReport};
use crate::service::AnalysisReport;
use crate::synthetic::SyntheticExample;

/// Examples echoed back by `generate`.
pub const GENERATION_SAMPLE_SIZE: usize = 10;

/// Result of one CLI command, printed as JSON on stdout.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    /// `detect`.
    Detection(DetectionResult),
    /// `correct`.
    Correction(CorrectionResult),
    /// `analyze`.
    Analysis(AnalysisReport),
    /// `generate`.
    Generation(GenerationOutput),
    /// `stats`.
    Stats(StatsOutput),
    /// `evaluate`.
    Evaluation(EvaluationReport),
    /// `help`.
    Help(&'static str),
}

/// Output of `generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutput {
    /// Examples generated by this run.
    pub count: usize,
    /// Corpus size after generation.
    pub total: usize,
    /// The first few generated examples.
    pub sample: Vec<SyntheticExample>,
    /// Where the corpus was written, if it was saved.
    pub saved_to: Option<String>,
}

/// Output of `stats`.
#[derive(Debug, Clone, Serialize)]
pub struct StatsOutput {
    /// The corpus file read.
    pub corpus_path: String,
    /// Statistics over it.
    #[serde(flatten)]
    pub metrics: CorpusMetrics,
}
