//! Detection signal and result types.

use serde::{Deserialize, Serialize};

use crate::catalog::{BiasKind, SeverityLevel};

// ============================================================================
// Raw signals
// ============================================================================

/// How a detection was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    /// Catalog keyword substring.
    Keyword,
    /// Catalog phrase substring.
    Phrase,
    /// Embedding similarity to a canonical exemplar.
    Semantic,
    /// Catalog-independent rule.
    Linguistic,
}

impl DetectionMethod {
    /// The lowercase method name used in reasoning strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Phrase => "phrase",
            Self::Semantic => "semantic",
            Self::Linguistic => "linguistic",
        }
    }
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a detection points at: a textual match or a similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    /// The keyword, phrase or rule description that fired.
    Match(String),
    /// Maximum cosine similarity to the kind's exemplars.
    Similarity(f32),
}

/// One finding from one matching method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// The bias kind signalled.
    pub kind: BiasKind,
    /// The method that fired.
    pub method: DetectionMethod,
    /// Matched snippet or similarity score.
    pub evidence: Evidence,
    /// Severity attached by the method.
    pub severity: SeverityLevel,
}

impl Detection {
    /// Create a detection backed by a textual match.
    #[must_use]
    pub fn matched(
        kind: BiasKind,
        method: DetectionMethod,
        snippet: impl Into<String>,
        severity: SeverityLevel,
    ) -> Self {
        Self {
            kind,
            method,
            evidence: Evidence::Match(snippet.into()),
            severity,
        }
    }

    /// Create a semantic detection backed by a similarity score.
    #[must_use]
    pub const fn semantic(kind: BiasKind, similarity: f32, severity: SeverityLevel) -> Self {
        Self {
            kind,
            method: DetectionMethod::Semantic,
            evidence: Evidence::Similarity(similarity),
            severity,
        }
    }

    /// The matched snippet, if this detection has one.
    #[must_use]
    pub fn snippet(&self) -> Option<&str> {
        match &self.evidence {
            Evidence::Match(snippet) => Some(snippet),
            Evidence::Similarity(_) => None,
        }
    }
}

// ============================================================================
// Fused result
// ============================================================================

/// Aggregate verdict for one input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// The analyzed text.
    pub text: String,
    /// Unique kinds, in order of first detection.
    pub biases_detected: Vec<BiasKind>,
    /// Overall confidence (0-95).
    pub confidence: u8,
    /// Maximum catalog severity among detected kinds.
    pub severity: SeverityLevel,
    /// Up to four human-readable explanations.
    pub reasoning: Vec<String>,
    /// Every raw signal, before deduplication.
    pub detections: Vec<Detection>,
}

impl DetectionResult {
    /// A result with no findings.
    #[must_use]
    pub fn empty(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            biases_detected: Vec::new(),
            confidence: 0,
            severity: SeverityLevel::Low,
            reasoning: Vec::new(),
            detections: Vec::new(),
        }
    }

    /// Returns true if any bias was detected.
    #[must_use]
    pub fn has_biases(&self) -> bool {
        !self.biases_detected.is_empty()
    }
}
