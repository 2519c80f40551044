//! Synthetic labeled example generator.
//!
//! Each example pairs a biased sentence, filled in from a template for a
//! uniformly sampled kind, with a hedged rewrite of it. Severity is sampled
//! uniformly from medium, high and critical and does NOT follow the catalog
//! severity of the labeled kind.
//!
//! Randomness and the clock are injected, so a seeded generator with a fixed
//! clock always produces the same corpus.
//!
//! # Example
//!
//! ```
//! use bias_lens::synthetic::SyntheticGenerator;
//!
//! let mut first = SyntheticGenerator::seeded(7);
//! let mut second = SyntheticGenerator::seeded(7);
//! let a: Vec<_> = first.generate(5).into_iter().map(|e| e.biased_text).collect();
//! let b: Vec<_> = second.generate(5).into_iter().map(|e| e.biased_text).collect();
//! assert_eq!(a, b);
//! ```

mod templates;

pub use templates::{fillers_for, placeholders, templates_for};

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{BiasKind, SeverityLevel};
use crate::correct::substitute;
use crate::traits::{RealTimeProvider, TimeProvider};

/// Severities a synthetic example can carry.
const SAMPLED_SEVERITIES: [SeverityLevel; 3] = [
    SeverityLevel::Medium,
    SeverityLevel::High,
    SeverityLevel::Critical,
];

/// One labeled training pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticExample {
    /// Template text with placeholders filled.
    pub biased_text: String,
    /// Hedged rewrite of `biased_text`.
    pub corrected_text: String,
    /// The kind the template was drawn from.
    pub bias_type: BiasKind,
    /// Sampled severity label.
    pub severity: SeverityLevel,
    /// When the example was generated.
    pub timestamp: DateTime<Utc>,
}

/// Template-filling generator that owns its growing example list.
#[derive(Debug)]
pub struct SyntheticGenerator<R, T> {
    rng: R,
    clock: T,
    examples: Vec<SyntheticExample>,
}

impl SyntheticGenerator<ChaCha8Rng, RealTimeProvider> {
    /// Generator with a fixed seed and the system clock.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed), RealTimeProvider)
    }

    /// Generator seeded from `seed` when given, otherwise from OS entropy.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(
            || Self::new(ChaCha8Rng::from_entropy(), RealTimeProvider),
            Self::seeded,
        )
    }
}

impl<R: Rng, T: TimeProvider> SyntheticGenerator<R, T> {
    /// Create a generator from an RNG and a clock.
    pub const fn new(rng: R, clock: T) -> Self {
        Self {
            rng,
            clock,
            examples: Vec::new(),
        }
    }

    /// Generate `n` examples, append them to the list and return them.
    pub fn generate(&mut self, n: usize) -> Vec<SyntheticExample> {
        let batch: Vec<SyntheticExample> = (0..n).map(|_| self.next_example()).collect();
        self.examples.extend(batch.iter().cloned());
        tracing::debug!(generated = n, total = self.examples.len(), "Generated examples");
        batch
    }

    /// Every example generated or loaded so far.
    #[must_use]
    pub fn examples(&self) -> &[SyntheticExample] {
        &self.examples
    }

    /// Owned copy of the example list.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SyntheticExample> {
        self.examples.clone()
    }

    /// Replace the example list, e.g. after loading a corpus.
    pub fn replace(&mut self, examples: Vec<SyntheticExample>) {
        self.examples = examples;
    }

    /// Number of examples held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Returns true if no examples are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    fn next_example(&mut self) -> SyntheticExample {
        let bias_type = BiasKind::ALL[self.rng.gen_range(0..BiasKind::ALL.len())];
        let candidates = templates_for(bias_type);
        let template = candidates[self.rng.gen_range(0..candidates.len())];
        let biased_text = self.fill(template);
        let corrected_text = frame(&substitute(&biased_text), bias_type);
        let severity = SAMPLED_SEVERITIES[self.rng.gen_range(0..SAMPLED_SEVERITIES.len())];

        SyntheticExample {
            biased_text,
            corrected_text,
            bias_type,
            severity,
            timestamp: self.clock.now(),
        }
    }

    fn fill(&mut self, template: &str) -> String {
        let mut text = template.to_string();
        for name in placeholders(template) {
            // Unknown names stay as literal text
            if let Some(values) = fillers_for(name) {
                let value = values[self.rng.gen_range(0..values.len())];
                text = text.replace(&format!("{{{name}}}"), value);
            }
        }
        text
    }
}

/// Prefix a rewrite with the framing sentence for its kind, if it has one.
#[must_use]
pub fn frame(corrected: &str, kind: BiasKind) -> String {
    match kind {
        BiasKind::AvailabilityHeuristic => {
            format!("While recent events are notable, historical patterns show {corrected}")
        }
        BiasKind::SurvivorshipBias => format!(
            "Though successful cases show this pattern, failure rates should be considered: {corrected}"
        ),
        BiasKind::ConfirmationBias => {
            format!("Evidence suggests (with limitations): {corrected}")
        }
        BiasKind::AnchoringBias | BiasKind::RecencyBias | BiasKind::Groupthink => {
            corrected.to_string()
        }
    }
}
