//! Service facade over detection, correction and the synthetic corpus.
//!
//! [`BiasService`] is what a front end talks to. It validates input, times
//! and records every operation, and owns the generator behind an async
//! mutex so concurrent callers never interleave appends with saves.
//!
//! # Example
//!
//! ```
//! use bias_lens::config::{BiasContext, Config};
//! use bias_lens::embedding::HashingEmbedder;
//! use bias_lens::service::BiasService;
//!
//! # tokio_test::block_on(async {
//! let context = BiasContext::new(Config::default()).unwrap();
//! let service = BiasService::new(context, HashingEmbedder::default());
//!
//! let result = service.detect_biases("Everyone knows it always works").await.unwrap();
//! assert!(!result.biases_detected.is_empty());
//! assert!(service.detect_biases("   ").await.is_err());
//! # });
//! ```

mod types;

pub use types::{AnalysisReport, GenerationReport};

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::catalog::BiasKind;
use crate::config::{BiasContext, Config};
use crate::correct::{correct, CorrectionResult};
use crate::detect::{validate_text, DetectionEngine, DetectionResult};
use crate::embedding::EmbeddingBackend;
use crate::error::{AppError, DetectError, StorageError};
use crate::metrics::{
    duration_ms, CorpusMetrics, EvaluationReport, MetricEvent, MetricsCollector, UsageSummary,
};
use crate::storage::CorpusStore;
use crate::synthetic::{SyntheticExample, SyntheticGenerator};
use crate::traits::{Embedder, RealTimeProvider, TimeProvider};

/// Operation names used in usage metrics.
pub mod operations {
    /// [`super::BiasService::detect_biases`].
    pub const DETECT: &str = "detect";
    /// [`super::BiasService::correct_text`].
    pub const CORRECT: &str = "correct";
    /// [`super::BiasService::analyze`].
    pub const ANALYZE: &str = "analyze";
    /// [`super::BiasService::generate_examples`].
    pub const GENERATE: &str = "generate";
    /// [`super::BiasService::save_corpus`].
    pub const SAVE: &str = "save";
    /// [`super::BiasService::load_corpus`].
    pub const LOAD: &str = "load";
    /// [`super::BiasService::corpus_stats`].
    pub const STATS: &str = "stats";
    /// [`super::BiasService::evaluate_corpus`].
    pub const EVALUATE: &str = "evaluate";
}

/// Bias analysis service.
#[derive(Debug)]
pub struct BiasService<E, T = RealTimeProvider> {
    context: BiasContext,
    engine: DetectionEngine<E>,
    generator: Mutex<SyntheticGenerator<ChaCha8Rng, T>>,
    clock: T,
    metrics: MetricsCollector,
}

impl BiasService<EmbeddingBackend> {
    /// Build the service described by a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the configuration or catalog is
    /// invalid and [`AppError::Embedding`] if the embedder cannot be built.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let embedder = EmbeddingBackend::from_config(&config)?;
        let context = BiasContext::new(config)?;
        Ok(Self::new(context, embedder))
    }
}

impl<E: Embedder> BiasService<E> {
    /// Create a service using the system clock.
    ///
    /// The generator is seeded from `GENERATOR_SEED` when configured.
    #[must_use]
    pub fn new(context: BiasContext, embedder: E) -> Self {
        Self::with_clock(context, embedder, RealTimeProvider)
    }
}

impl<E: Embedder, T: TimeProvider + Clone> BiasService<E, T> {
    /// Create a service with an injected clock.
    #[must_use]
    pub fn with_clock(context: BiasContext, embedder: E, clock: T) -> Self {
        let rng = context
            .config
            .generator_seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        let engine = DetectionEngine::new(&context, embedder);
        Self {
            generator: Mutex::new(SyntheticGenerator::new(rng, clock.clone())),
            engine,
            clock,
            context,
            metrics: MetricsCollector::new(),
        }
    }

    /// The shared context.
    #[must_use]
    pub const fn context(&self) -> &BiasContext {
        &self.context
    }

    /// The configured corpus path.
    #[must_use]
    pub fn corpus_path(&self) -> PathBuf {
        PathBuf::from(&self.context.config.corpus_path)
    }

    /// Detect biases in a text.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::InvalidInput`] for empty or whitespace text
    /// and [`DetectError::Embedding`] if semantic analysis fails.
    pub async fn detect_biases(&self, text: &str) -> Result<DetectionResult, DetectError> {
        self.timed(operations::DETECT, async {
            validate_text(text)?;
            let result = self.engine.detect_biases(text).await?;
            tracing::info!(
                kinds = ?result.biases_detected,
                confidence = result.confidence,
                severity = %result.severity,
                "Detected biases"
            );
            Ok(result)
        })
        .await
    }

    /// Correct a text for the given kinds, detecting them first when none
    /// are given.
    ///
    /// # Errors
    ///
    /// Same as [`BiasService::detect_biases`].
    pub async fn correct_text(
        &self,
        text: &str,
        kinds: &[BiasKind],
    ) -> Result<CorrectionResult, DetectError> {
        self.timed(operations::CORRECT, async {
            validate_text(text)?;
            let kinds = if kinds.is_empty() {
                self.engine.detect_biases(text).await?.biases_detected
            } else {
                kinds.to_vec()
            };
            let result = correct(text, &kinds);
            tracing::info!(kinds = kinds.len(), "Corrected text");
            Ok(result)
        })
        .await
    }

    /// Detect, then correct when anything was found.
    ///
    /// # Errors
    ///
    /// Same as [`BiasService::detect_biases`].
    pub async fn analyze(&self, text: &str) -> Result<AnalysisReport, DetectError> {
        self.timed(operations::ANALYZE, async {
            validate_text(text)?;
            let detection = self.engine.detect_biases(text).await?;
            let correction = detection
                .has_biases()
                .then(|| correct(text, &detection.biases_detected));
            let report = AnalysisReport {
                analysis_id: Uuid::new_v4(),
                timestamp: self.clock.now(),
                detection,
                correction,
            };
            tracing::info!(
                analysis_id = %report.analysis_id,
                kinds = report.detection.biases_detected.len(),
                "Analysis complete"
            );
            Ok(report)
        })
        .await
    }

    /// Generate `n` synthetic examples and append them to the in-memory corpus.
    pub async fn generate_examples(&self, n: usize) -> GenerationReport {
        let start = Instant::now();
        let mut generator = self.generator.lock().await;
        let examples = generator.generate(n);
        let total = generator.len();
        drop(generator);

        self.record(operations::GENERATE, start, true);
        tracing::info!(generated = examples.len(), total, "Generated synthetic examples");
        GenerationReport { examples, total }
    }

    /// Snapshot of the in-memory corpus.
    pub async fn examples(&self) -> Vec<SyntheticExample> {
        self.generator.lock().await.snapshot()
    }

    /// Overwrite the corpus file at `path` with the in-memory corpus.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file cannot be written.
    pub async fn save_corpus(&self, path: impl AsRef<Path>) -> Result<usize, StorageError> {
        let store = CorpusStore::new(path.as_ref());
        self.timed(operations::SAVE, async {
            // Snapshot under the lock, write outside it
            let snapshot = self.generator.lock().await.snapshot();
            store.save(&snapshot).await?;
            Ok(snapshot.len())
        })
        .await
    }

    /// Replace the in-memory corpus with the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::CorpusNotFound`] if the file does not exist,
    /// or another [`StorageError`] if it cannot be read.
    pub async fn load_corpus(&self, path: impl AsRef<Path>) -> Result<usize, StorageError> {
        let store = CorpusStore::new(path.as_ref());
        self.timed(operations::LOAD, async {
            let examples = store.load().await?;
            let count = examples.len();
            self.generator.lock().await.replace(examples);
            Ok(count)
        })
        .await
    }

    /// Statistics over the persisted corpus; an absent file gives empty stats.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if an existing corpus cannot be read.
    pub async fn corpus_stats(&self) -> Result<CorpusMetrics, StorageError> {
        let store = CorpusStore::new(self.corpus_path());
        self.timed(operations::STATS, async {
            let examples = store.load_or_empty().await?;
            Ok(CorpusMetrics::compute(&examples))
        })
        .await
    }

    /// Run detection over the in-memory corpus and report recall of each
    /// example's labeled kind.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError`] if any example cannot be analyzed.
    pub async fn evaluate_corpus(&self) -> Result<EvaluationReport, DetectError> {
        let snapshot = self.examples().await;
        self.timed(operations::EVALUATE, async {
            let mut report = EvaluationReport::default();
            for example in &snapshot {
                let result = self.engine.detect_biases(&example.biased_text).await?;
                report.record(
                    example.bias_type,
                    result.biases_detected.contains(&example.bias_type),
                );
            }
            tracing::info!(
                examples = report.total_examples,
                recall = report.overall_recall,
                "Evaluated corpus"
            );
            Ok(report)
        })
        .await
    }

    /// Per-operation invocation counts, success rates and latency.
    #[must_use]
    pub fn usage_summary(&self) -> UsageSummary {
        self.metrics.summary()
    }

    async fn timed<R, Err>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = Result<R, Err>>,
    ) -> Result<R, Err>
    where
        Err: std::fmt::Display,
    {
        let start = Instant::now();
        let result = fut.await;
        if let Err(e) = &result {
            tracing::warn!(operation, error = %e, "Operation failed");
        }
        self.record(operation, start, result.is_ok());
        result
    }

    fn record(&self, operation: &'static str, start: Instant, success: bool) {
        let latency_ms = duration_ms(start.elapsed());
        self.metrics
            .record(MetricEvent::new(operation, latency_ms, success));
    }
}
