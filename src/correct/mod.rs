//! Phrase-table corrector.
//!
//! Rewrites overconfident wording into hedged wording with an ordered,
//! case-sensitive substitution table, then applies two heuristics:
//! 1. If the text still says "will" but not "likely", every "will" becomes "may"
//! 2. If the text never mentions a study, data, research or evidence, it is
//!    lowercased and prefixed with "Based on available data, "
//!
//! [`recommendations_for`] supplies the remediation advice that accompanies
//! each correction.

mod recommendations;

pub use recommendations::recommendations_for;

use serde::{Deserialize, Serialize};

use crate::catalog::BiasKind;

/// Ordered substitutions. Earlier rules see the original wording, later
/// rules see the output of earlier ones.
pub const SUBSTITUTIONS: [(&str, &str); 9] = [
    ("definitely", "likely"),
    ("will succeed", "has potential to succeed"),
    ("always", "often"),
    ("never", "rarely"),
    ("everyone knows", "research suggests"),
    ("obviously", "evidence indicates"),
    ("certainly", "probably"),
    ("guaranteed", "expected"),
    (
        "based on recent trends",
        "considering both historical and recent data",
    ),
];

/// Words whose presence means the text already cites support.
const EVIDENCE_MARKERS: [&str; 4] = ["study", "data", "research", "evidence"];

/// Prefix added to text that cites no support.
pub const EVIDENCE_PREFIX: &str = "Based on available data, ";

/// A rewritten text with the advice that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// The text as submitted.
    pub original: String,
    /// The rewritten text.
    pub corrected: String,
    /// Kinds the correction was asked to address.
    pub biases_addressed: Vec<BiasKind>,
    /// Remediation advice for those kinds.
    pub recommendations: Vec<String>,
}

/// Apply the substitution table only.
#[must_use]
pub fn substitute(text: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Apply the substitution table and both post-pass heuristics.
///
/// Deterministic; applying it to its own output is safe but not a no-op.
#[must_use]
pub fn rewrite(text: &str) -> String {
    let mut corrected = substitute(text);

    if corrected.contains("will") && !corrected.contains("likely") {
        corrected = corrected.replace("will", "may");
    }

    let lower = corrected.to_lowercase();
    if EVIDENCE_MARKERS.iter().any(|m| lower.contains(m)) {
        corrected
    } else {
        format!("{EVIDENCE_PREFIX}{lower}")
    }
}

/// Rewrite a text and attach recommendations for the given kinds.
#[must_use]
pub fn correct(text: &str, kinds: &[BiasKind]) -> CorrectionResult {
    CorrectionResult {
        original: text.to_string(),
        corrected: rewrite(text),
        biases_addressed: kinds.to_vec(),
        recommendations: recommendations_for(kinds),
    }
}
