//! Local feature-hashing embedder.
//!
//! Approximates a sentence embedding without model weights:
//!   1. Normalize the text and split it into word 1-, 2- and 3-grams
//!   2. Hash each n-gram into a deterministic ±1 feature vector (SHA-256)
//!   3. Sum the features and L2-normalize
//!
//! Texts sharing many n-grams land close together, which is enough to
//! recognize paraphrases of the canonical exemplars that reuse their wording.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::error::EmbeddingError;
use crate::traits::Embedder;

/// Default embedding width, matching common small sentence-transformer models.
pub const DEFAULT_DIMENSIONS: usize = 384;

/// Longest n-gram hashed into the vector.
const MAX_NGRAM: usize = 3;

/// Domain separator so features never collide with other SHA-256 uses.
const FEATURE_SALT: &[u8] = b"bias-lens:rfh:v1:";

/// Bits produced by one SHA-256 digest.
const BITS_PER_DIGEST: usize = 256;

/// Deterministic embedder built on random feature hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

impl HashingEmbedder {
    /// Create an embedder producing vectors of the given width.
    #[must_use]
    pub const fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Embed text synchronously.
    #[must_use]
    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let normalized = normalize_text(text);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        let mut vector = vec![0.0_f32; self.dimensions];

        for n in 1..=MAX_NGRAM {
            for window in tokens.windows(n) {
                self.accumulate_feature(&window.join(" "), &mut vector);
            }
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for value in &mut vector {
                *value /= norm;
            }
        }
        vector
    }

    /// Add the ±1 feature vector of one n-gram into `vector`.
    fn accumulate_feature(&self, gram: &str, vector: &mut [f32]) {
        let blocks = self.dimensions.div_ceil(BITS_PER_DIGEST);
        for block in 0..blocks {
            let mut hasher = Sha256::new();
            hasher.update(FEATURE_SALT);
            hasher.update(block.to_le_bytes());
            hasher.update(gram.as_bytes());
            let digest = hasher.finalize();

            let start = block * BITS_PER_DIGEST;
            let end = (start + BITS_PER_DIGEST).min(self.dimensions);
            for (offset, value) in vector[start..end].iter_mut().enumerate() {
                let bit = (digest[offset / 8] >> (offset % 8)) & 1;
                *value += if bit == 1 { 1.0 } else { -1.0 };
            }
        }
    }
}

#[async_trait]
impl Embedder for HashingEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.embed_text(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Lowercase and replace punctuation with spaces, keeping apostrophes.
fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '\'' {
                c
            } else {
                ' '
            }
        })
        .collect()
}
