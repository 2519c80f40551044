//! Trait definitions for swappable dependencies.
//!
//! This module defines traits for:
//! - [`Embedder`]: Sentence-embedding backend abstraction
//! - [`TimeProvider`]: Time abstraction for testing
//!
//! # Mocking
//!
//! All traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.
//!
//! # Example
//!
//! ```
//! use bias_lens::traits::{TimeProvider, RealTimeProvider};
//!
//! let time_provider = RealTimeProvider;
//! let now = time_provider.now();
//! println!("Current time: {now}");
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::EmbeddingError;

/// Sentence-embedding backend.
///
/// Implementations map text to a fixed-length vector. Semantic closeness of
/// two texts is approximated purely by the cosine similarity of their
/// vectors, so any backend producing comparable vectors can be swapped in
/// without touching the fusion engine.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single text.
    ///
    /// # Errors
    ///
    /// Returns [`EmbeddingError`] if the backend cannot produce a vector.
    /// Failures must never be reported as an empty or zero vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Length of every vector returned by [`Embedder::embed`].
    fn dimensions(&self) -> usize;
}

/// Time provider trait for deterministic testing.
///
/// This trait abstracts time operations to allow for
/// deterministic testing by providing fixed timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait TimeProvider: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Real time provider using system clock.
///
/// This is the production implementation that returns the actual current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeProvider;

impl TimeProvider for RealTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time provider frozen at a single instant.
///
/// Used to build reproducible corpora where timestamps must match across runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeProvider(pub DateTime<Utc>);

impl TimeProvider for FixedTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(RealTimeProvider: Send, Sync, Clone, Copy, Default);
    assert_impl_all!(FixedTimeProvider: Send, Sync, Clone, Copy);

    #[test]
    fn test_real_time_provider_now() {
        let provider = RealTimeProvider;
        let before = Utc::now();
        let now = provider.now();
        let after = Utc::now();
        assert!(now >= before);
        assert!(now <= after);
    }

    #[test]
    fn test_fixed_time_provider_is_frozen() {
        let instant = Utc::now();
        let provider = FixedTimeProvider(instant);
        assert_eq!(provider.now(), instant);
        assert_eq!(provider.now(), provider.now());
    }

    #[tokio::test]
    async fn test_mock_embedder() {
        let mut mock = MockEmbedder::new();
        mock.expect_embed().returning(|_text| Ok(vec![1.0, 0.0]));
        mock.expect_dimensions().return_const(2_usize);

        let vector = mock.embed("anything").await.unwrap();
        assert_eq!(vector, vec![1.0, 0.0]);
        assert_eq!(mock.dimensions(), 2);
    }

    #[tokio::test]
    async fn test_mock_embedder_error() {
        let mut mock = MockEmbedder::new();
        mock.expect_embed().returning(|_text| {
            Err(EmbeddingError::Network {
                message: "connection refused".to_string(),
            })
        });

        let result = mock.embed("anything").await;
        assert!(matches!(result, Err(EmbeddingError::Network { .. })));
    }

    #[test]
    fn test_mock_time_provider() {
        let fixed = Utc::now();
        let mut mock = MockTimeProvider::new();
        mock.expect_now().return_const(fixed);
        assert_eq!(mock.now(), fixed);
    }
}
