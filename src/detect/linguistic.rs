//! Catalog-independent linguistic heuristics.
//!
//! Both rules signal confirmation bias and fire independently.

use super::types::{Detection, DetectionMethod};
use crate::catalog::{BiasKind, SeverityLevel};

/// Absolute terms counted for the density rule.
const ABSOLUTE_TERMS: [&str; 6] = ["always", "never", "everyone", "nobody", "all", "none"];

/// Distinct absolute terms needed before the density rule fires.
const ABSOLUTE_TERM_THRESHOLD: usize = 2;

/// Phrases that state a prediction as settled.
const DEFINITIVE_PHRASES: [&str; 3] = ["will definitely", "certainly will", "guaranteed to"];

/// Any of these cancels the overconfidence rule.
const HEDGE_MARKERS: [&str; 5] = ["might", "could", "perhaps", "possibly", "approximately"];

/// Run both heuristics over the text.
#[must_use]
pub fn scan(text: &str) -> Vec<Detection> {
    let lower = text.to_lowercase();
    let mut detections = Vec::new();

    let absolute_count = ABSOLUTE_TERMS
        .iter()
        .filter(|term| lower.contains(*term))
        .count();
    if absolute_count >= ABSOLUTE_TERM_THRESHOLD {
        detections.push(Detection::matched(
            BiasKind::ConfirmationBias,
            DetectionMethod::Linguistic,
            format!("{absolute_count} absolute terms"),
            SeverityLevel::High,
        ));
    }

    let has_definitive = DEFINITIVE_PHRASES.iter().any(|p| lower.contains(p));
    let has_hedge = HEDGE_MARKERS.iter().any(|m| lower.contains(m));
    if has_definitive && !has_hedge {
        detections.push(Detection::matched(
            BiasKind::ConfirmationBias,
            DetectionMethod::Linguistic,
            "overconfident prediction",
            SeverityLevel::High,
        ));
    }

    detections
}
