//! Property tests for the detection engine.
//!
//! Semantic matching is neutralized with an all-zero embedder so every
//! property concerns the lexical and linguistic passes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use async_trait::async_trait;
use bias_lens::config::{BiasContext, Config};
use bias_lens::detect::{confidence_for, DetectionEngine, MAX_CONFIDENCE};
use bias_lens::error::EmbeddingError;
use bias_lens::traits::Embedder;
use proptest::prelude::*;

/// Every vector is zero, so cosine similarity is always 0.
struct ZeroEmbedder;

#[async_trait]
impl Embedder for ZeroEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(vec![0.0; 16])
    }

    fn dimensions(&self) -> usize {
        16
    }
}

const TRIGGERS: [&str; 10] = [
    "always",
    "never",
    "obviously",
    "latest",
    "winners",
    "consensus is",
    "compared to",
    "trending",
    "definitely",
    "everyone knows",
];

fn engine() -> DetectionEngine<ZeroEmbedder> {
    let context = BiasContext::new(Config::default()).expect("default config must be valid");
    DetectionEngine::new(&context, ZeroEmbedder)
}

proptest! {
    #[test]
    fn confidence_is_monotonic_and_capped(
        base in "[a-z ]{0,40}",
        picks in prop::collection::vec(prop::sample::select(TRIGGERS.to_vec()), 1..12),
    ) {
        let engine = engine();
        let mut text = base;
        let mut previous = 0_u8;

        for trigger in picks {
            text.push(' ');
            text.push_str(trigger);
            let result = tokio_test::block_on(engine.detect_biases(&text)).unwrap();

            prop_assert!(result.confidence >= previous, "{text:?}");
            prop_assert!(result.confidence <= MAX_CONFIDENCE);
            prop_assert!(result.has_biases());
            previous = result.confidence;
        }
    }

    #[test]
    fn confidence_formula_is_capped(count in 0_usize..10_000) {
        let confidence = confidence_for(count);
        prop_assert!(confidence <= MAX_CONFIDENCE);
        prop_assert_eq!(confidence == 0, count == 0);
        if count > 0 {
            prop_assert!(confidence_for(count - 1) <= confidence);
        }
    }

    #[test]
    fn kinds_are_unique_and_reasoning_bounded(text in "[a-zA-Z ,.']{1,120}") {
        let result = tokio_test::block_on(engine().detect_biases(&text)).unwrap();

        let mut kinds = result.biases_detected.clone();
        kinds.sort();
        kinds.dedup();
        prop_assert_eq!(kinds.len(), result.biases_detected.len());
        prop_assert!(result.reasoning.len() <= 4);
        prop_assert_eq!(result.has_biases(), !result.detections.is_empty());
    }
}
