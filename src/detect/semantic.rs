//! Embedding-similarity matcher.
//!
//! Each supported kind has a handful of canonical biased sentences. The input
//! is embedded once and compared against every exemplar; the best score per
//! kind decides whether a semantic detection is emitted.

use std::sync::Arc;

use tokio::sync::OnceCell;

use super::types::Detection;
use crate::catalog::{BiasKind, PatternCatalog};
use crate::embedding::cosine_similarity;
use crate::error::{DetectError, EmbeddingError};
use crate::traits::Embedder;

/// Canonical biased sentences, per kind.
const EXEMPLARS: [(BiasKind, [&str; 3]); 3] = [
    (
        BiasKind::ConfirmationBias,
        [
            "This definitely proves my point",
            "As everyone knows, this is obviously true",
            "It's clear that this always happens",
        ],
    ),
    (
        BiasKind::AvailabilityHeuristic,
        [
            "Given recent viral news, this trend is certain",
            "Everyone's been talking about this lately",
            "With what happened yesterday, we can conclude",
        ],
    ),
    (
        BiasKind::SurvivorshipBias,
        [
            "Looking at successful people, we see they all did this",
            "Every winner followed this exact path",
            "The best performers all share this trait",
        ],
    ),
];

type ExemplarVectors = Vec<(BiasKind, Vec<Vec<f32>>)>;

/// Similarity matcher over a swappable embedder.
pub struct SemanticMatcher<E> {
    embedder: E,
    catalog: Arc<PatternCatalog>,
    threshold: f32,
    exemplars: OnceCell<ExemplarVectors>,
}

impl<E> std::fmt::Debug for SemanticMatcher<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticMatcher")
            .field("threshold", &self.threshold)
            .field("exemplars_cached", &self.exemplars.initialized())
            .finish_non_exhaustive()
    }
}

impl<E: Embedder> SemanticMatcher<E> {
    /// Create a matcher. Detections fire when similarity is strictly above
    /// `threshold`.
    #[must_use]
    pub fn new(embedder: E, catalog: Arc<PatternCatalog>, threshold: f32) -> Self {
        Self {
            embedder,
            catalog,
            threshold,
            exemplars: OnceCell::new(),
        }
    }

    /// Score the text against every exemplar set.
    ///
    /// Empty or whitespace-only text yields no detections without calling
    /// the embedder.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::Embedding`] if the input or an exemplar cannot
    /// be embedded, and [`DetectError::Catalog`] if a kind lacks a catalog
    /// entry.
    pub async fn scan(&self, text: &str) -> Result<Vec<Detection>, DetectError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let input = self.embedder.embed(text).await?;
        let exemplars = self
            .exemplars
            .get_or_try_init(|| self.embed_exemplars())
            .await?;

        let mut detections = Vec::new();
        for (kind, vectors) in exemplars {
            let best = vectors
                .iter()
                .map(|v| cosine_similarity(&input, v))
                .fold(f32::MIN, f32::max);

            if best > self.threshold {
                let severity = self.catalog.lookup(*kind)?.severity;
                tracing::debug!(kind = %kind, similarity = best, "Semantic match");
                detections.push(Detection::semantic(*kind, best, severity));
            }
        }

        Ok(detections)
    }

    async fn embed_exemplars(&self) -> Result<ExemplarVectors, EmbeddingError> {
        let mut all = Vec::with_capacity(EXEMPLARS.len());
        for (kind, sentences) in EXEMPLARS {
            let mut vectors = Vec::with_capacity(sentences.len());
            for sentence in sentences {
                vectors.push(self.embedder.embed(sentence).await?);
            }
            all.push((kind, vectors));
        }
        tracing::debug!(kinds = all.len(), "Cached exemplar embeddings");
        Ok(all)
    }
}
