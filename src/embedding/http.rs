//! Remote embedding client.
//!
//! This module provides:
//! - HTTP client for OpenAI-compatible `/embeddings` endpoints
//!   (hosted sentence-transformer servers expose the same shape)
//! - Response parsing and dimension checks
//!
//! There is no retry loop: a failed call surfaces as an [`EmbeddingError`]
//! so the caller can tell "could not analyze" from "found nothing".

#![allow(clippy::missing_errors_doc)]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::SecretString;
use crate::error::EmbeddingError;
use crate::metrics::duration_ms;
use crate::traits::Embedder;

/// Default base URL for a locally hosted embedding server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/v1";
/// Default model name sent with each request.
pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";
/// Default timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuration for [`HttpEmbedder`].
#[derive(Debug, Clone)]
pub struct HttpEmbedderConfig {
    /// Base URL; `/embeddings` is appended.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Optional bearer token.
    pub api_key: Option<SecretString>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Expected vector length.
    pub dimensions: usize,
}

impl HttpEmbedderConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the bearer token.
    #[must_use]
    pub fn with_api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the expected vector length.
    #[must_use]
    pub const fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }
}

impl Default for HttpEmbedderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            dimensions: super::hashing::DEFAULT_DIMENSIONS,
        }
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Embedding client for a remote sentence-embedding service.
#[derive(Debug)]
pub struct HttpEmbedder {
    client: Client,
    config: HttpEmbedderConfig,
}

impl HttpEmbedder {
    /// Create a new client.
    pub fn new(config: HttpEmbedderConfig) -> Result<Self, EmbeddingError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| EmbeddingError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn request_embedding(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let url = format!("{}/embeddings", self.config.base_url.trim_end_matches('/'));
        let start = std::time::Instant::now();

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            chars = text.len(),
            "Requesting embedding"
        );

        let mut request = self.client.post(&url).json(&EmbeddingRequest {
            model: &self.config.model,
            input: text,
        });
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key.expose());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                tracing::error!(
                    url = %url,
                    timeout_ms = self.config.timeout_ms,
                    "Embedding request timed out"
                );
                EmbeddingError::Timeout {
                    timeout_ms: self.config.timeout_ms,
                }
            } else {
                EmbeddingError::Network {
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::UnexpectedResponse {
                message: format!("Status {status}: {body}"),
            });
        }

        let parsed: EmbeddingResponse =
            response
                .json()
                .await
                .map_err(|e| EmbeddingError::UnexpectedResponse {
                    message: format!("Invalid embedding payload: {e}"),
                })?;

        let vector = parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| EmbeddingError::UnexpectedResponse {
                message: "Response contained no embeddings".to_string(),
            })?;

        if vector.len() != self.config.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.config.dimensions,
                actual: vector.len(),
            });
        }

        tracing::debug!(
            elapsed_ms = duration_ms(start.elapsed()),
            "Embedding received"
        );
        Ok(vector)
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }
        self.request_embedding(text).await
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }
}
