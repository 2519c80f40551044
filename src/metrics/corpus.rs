//! Corpus statistics and detector evaluation.

#![allow(clippy::cast_precision_loss)]

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::catalog::BiasKind;
use crate::synthetic::SyntheticExample;

/// Descriptive statistics over a synthetic corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusMetrics {
    /// Number of examples.
    pub total_examples: usize,
    /// Examples per labeled kind.
    pub bias_distribution: BTreeMap<BiasKind, usize>,
    /// Mean of corrected minus biased length, in characters.
    pub avg_correction_length: f64,
    /// Number of distinct biased texts.
    pub unique_patterns: usize,
}

impl CorpusMetrics {
    /// Compute statistics; an empty corpus yields all zeros.
    #[must_use]
    pub fn compute(examples: &[SyntheticExample]) -> Self {
        if examples.is_empty() {
            return Self::default();
        }

        let mut bias_distribution = BTreeMap::new();
        for example in examples {
            *bias_distribution.entry(example.bias_type).or_insert(0) += 1;
        }

        let total_delta: i64 = examples
            .iter()
            .map(|e| char_len(&e.corrected_text) - char_len(&e.biased_text))
            .sum();

        let unique: HashSet<&str> = examples.iter().map(|e| e.biased_text.as_str()).collect();

        Self {
            total_examples: examples.len(),
            bias_distribution,
            avg_correction_length: total_delta as f64 / examples.len() as f64,
            unique_patterns: unique.len(),
        }
    }
}

fn char_len(text: &str) -> i64 {
    i64::try_from(text.chars().count()).unwrap_or(i64::MAX)
}

/// Detection outcome for one labeled kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KindRecall {
    /// Examples carrying this label.
    pub examples: usize,
    /// Examples whose label appeared among the detected kinds.
    pub detected: usize,
    /// `detected / examples`, or 0 when there are no examples.
    pub recall: f64,
}

/// Recall of the detector against corpus labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Examples evaluated.
    pub total_examples: usize,
    /// Examples whose label was detected.
    pub total_detected: usize,
    /// Overall recall; 0 for an empty corpus.
    pub overall_recall: f64,
    /// Per-kind breakdown.
    pub by_kind: BTreeMap<BiasKind, KindRecall>,
}

impl EvaluationReport {
    /// Record whether the labeled kind of one example was detected.
    pub fn record(&mut self, label: BiasKind, detected: bool) {
        let entry = self.by_kind.entry(label).or_default();
        entry.examples += 1;
        self.total_examples += 1;
        if detected {
            entry.detected += 1;
            self.total_detected += 1;
        }
        entry.recall = ratio(entry.detected, entry.examples);
        self.overall_recall = ratio(self.total_detected, self.total_examples);
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
