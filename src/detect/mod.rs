//! Bias detection engine.
//!
//! This module provides:
//! - [`LexicalMatcher`]: catalog keyword and phrase hits
//! - [`linguistic::scan`]: absolute-term and overconfidence heuristics
//! - [`SemanticMatcher`]: embedding similarity to canonical exemplars
//! - [`fuse`]: deduplication, confidence, severity and reasoning
//! - [`DetectionEngine`]: the three matchers and fusion wired together
//!
//! The matchers are independent and read-only. Their outputs are
//! concatenated lexical, then linguistic, then semantic before fusion.

mod fusion;
mod lexical;
pub mod linguistic;
mod semantic;
mod types;

pub use fusion::{confidence_for, fuse, CONFIDENCE_PER_DETECTION, MAX_CONFIDENCE, MAX_REASONING};
pub use lexical::LexicalMatcher;
pub use semantic::SemanticMatcher;
pub use types::{Detection, DetectionMethod, DetectionResult, Evidence};

use std::sync::Arc;

use crate::catalog::PatternCatalog;
use crate::config::BiasContext;
use crate::error::DetectError;
use crate::traits::Embedder;

/// Reject text that cannot be analyzed.
///
/// # Errors
///
/// Returns [`DetectError::InvalidInput`] if the text is empty or whitespace.
pub fn validate_text(text: &str) -> Result<(), DetectError> {
    if text.trim().is_empty() {
        return Err(DetectError::InvalidInput {
            reason: "text must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Multi-method detector over a shared catalog.
#[derive(Debug)]
pub struct DetectionEngine<E> {
    catalog: Arc<PatternCatalog>,
    lexical: LexicalMatcher,
    semantic: SemanticMatcher<E>,
}

impl<E: Embedder> DetectionEngine<E> {
    /// Create an engine from the shared context and an embedding backend.
    #[must_use]
    pub fn new(context: &BiasContext, embedder: E) -> Self {
        let catalog = Arc::clone(&context.catalog);
        Self {
            lexical: LexicalMatcher::new(Arc::clone(&catalog)),
            semantic: SemanticMatcher::new(
                embedder,
                Arc::clone(&catalog),
                context.config.semantic_threshold,
            ),
            catalog,
        }
    }

    /// Analyze a text.
    ///
    /// Empty text yields an empty result here; callers that must reject it
    /// use [`validate_text`] first. Finding nothing is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::Embedding`] if the semantic matcher cannot embed
    /// the text.
    pub async fn detect_biases(&self, text: &str) -> Result<DetectionResult, DetectError> {
        let mut detections = self.lexical.scan(text);
        detections.extend(linguistic::scan(text));
        detections.extend(self.semantic.scan(text).await?);

        let result = fuse(text, detections, &self.catalog)?;
        tracing::debug!(
            kinds = result.biases_detected.len(),
            raw = result.detections.len(),
            confidence = result.confidence,
            severity = %result.severity,
            "Detection complete"
        );
        Ok(result)
    }
}
