//! Sentence-embedding backends.
//!
//! This module provides:
//! - [`cosine_similarity`], the only notion of semantic closeness used by the engine
//! - [`HashingEmbedder`], a local deterministic backend (default)
//! - [`HttpEmbedder`], a client for a remote embedding service
//! - [`EmbeddingBackend`], the runtime choice between them
//!
//! All backends implement [`Embedder`], so the semantic matcher never
//! depends on a concrete model.

mod hashing;
mod http;

pub use hashing::{HashingEmbedder, DEFAULT_DIMENSIONS};
pub use http::{HttpEmbedder, HttpEmbedderConfig, DEFAULT_MODEL as DEFAULT_EMBEDDING_MODEL};

use async_trait::async_trait;

use crate::config::Config;
use crate::error::EmbeddingError;
use crate::traits::Embedder;

/// Compute cosine similarity between two embedding vectors.
///
/// Returns 0.0 for mismatched lengths, empty vectors, or zero vectors.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0_f32;
    let mut norm_a = 0.0_f32;
    let mut norm_b = 0.0_f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < f32::EPSILON {
        0.0
    } else {
        dot / denom
    }
}

/// Embedding backend selected from configuration.
#[derive(Debug)]
pub enum EmbeddingBackend {
    /// Local feature hashing.
    Hashing(HashingEmbedder),
    /// Remote embedding service.
    Http(HttpEmbedder),
}

impl EmbeddingBackend {
    /// Build the backend described by the configuration.
    ///
    /// A configured `EMBEDDING_URL` selects the remote service; otherwise the
    /// local hashing embedder is used.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingError`] if the HTTP client cannot be created.
    pub fn from_config(config: &Config) -> Result<Self, EmbeddingError> {
        match &config.embedding_url {
            Some(url) => {
                let mut client_config = HttpEmbedderConfig::new()
                    .with_base_url(url.clone())
                    .with_model(config.embedding_model.clone())
                    .with_timeout_ms(config.embedding_timeout_ms)
                    .with_dimensions(config.embedding_dimensions);
                if let Some(key) = &config.embedding_api_key {
                    client_config = client_config.with_api_key(key.clone());
                }
                let client = HttpEmbedder::new(client_config)?;
                tracing::info!(
                    url = %client.base_url(),
                    model = %config.embedding_model,
                    "Using remote embedder"
                );
                Ok(Self::Http(client))
            }
            None => {
                tracing::info!(
                    dimensions = config.embedding_dimensions,
                    "Using local hashing embedder"
                );
                Ok(Self::Hashing(HashingEmbedder::new(
                    config.embedding_dimensions,
                )))
            }
        }
    }
}

#[async_trait]
impl Embedder for EmbeddingBackend {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match self {
            Self::Hashing(embedder) => embedder.embed(text).await,
            Self::Http(embedder) => embedder.embed(text).await,
        }
    }

    fn dimensions(&self) -> usize {
        match self {
            Self::Hashing(embedder) => embedder.dimensions(),
            Self::Http(embedder) => embedder.dimensions(),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::test_utils::test_config;

    #[test]
    fn test_cosine_identical() {
        let v = vec![0.3, 0.4, 0.5];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_cosine_opposite() {
        assert!((cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_backend_defaults_to_hashing() {
        let config = test_config();
        let backend = EmbeddingBackend::from_config(&config).unwrap();
        assert!(matches!(backend, EmbeddingBackend::Hashing(_)));
        assert_eq!(backend.dimensions(), config.embedding_dimensions);
    }

    #[test]
    fn test_backend_uses_http_when_url_set() {
        let mut config = test_config();
        config.embedding_url = Some("http://localhost:9999/v1".to_string());
        let backend = EmbeddingBackend::from_config(&config).unwrap();
        match backend {
            EmbeddingBackend::Http(client) => {
                assert_eq!(client.base_url(), "http://localhost:9999/v1");
            }
            EmbeddingBackend::Hashing(_) => panic!("expected http backend"),
        }
    }

    #[tokio::test]
    async fn test_backend_delegates_embed() {
        let backend = EmbeddingBackend::Hashing(HashingEmbedder::new(8));
        let vector = backend.embed("delegation works").await.unwrap();
        assert_eq!(vector, HashingEmbedder::new(8).embed_text("delegation works"));
    }
}
