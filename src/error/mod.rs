//! Error types for bias-lens.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`ConfigError`]: Configuration and catalog loading errors (fatal at startup)
//! - [`CatalogError`]: Pattern catalog lookup errors
//! - [`DetectError`]: Detection entry point errors
//! - [`EmbeddingError`]: Embedding backend errors
//! - [`StorageError`]: Corpus persistence errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by the service and the CLI.
/// It wraps all subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog error.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Detection error.
    #[error("Detection error: {0}")]
    Detect(#[from] DetectError),

    /// Embedding error.
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
/// A malformed catalog is reported here because it can only happen at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },

    /// The pattern catalog definition could not be loaded.
    #[error("Malformed catalog: {reason}")]
    MalformedCatalog {
        /// Description of the defect.
        reason: String,
    },
}

/// Pattern catalog errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No entry exists for the requested bias kind.
    #[error("Unknown bias kind: {kind}")]
    UnknownKind {
        /// The kind that was requested.
        kind: String,
    },
}

/// Detection errors.
///
/// An empty detection list is never an error. These variants only cover
/// input that cannot be analyzed and backends that failed to analyze it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DetectError {
    /// The input was rejected before analysis.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected.
        reason: String,
    },

    /// The semantic matcher could not embed the text.
    #[error("Semantic analysis failed: {0}")]
    Embedding(#[from] EmbeddingError),

    /// The catalog has no entry for a detected kind.
    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),
}

/// Embedding backend errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmbeddingError {
    /// Network communication error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// Request timed out.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Unexpected response from the embedding service.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Description of what was unexpected.
        message: String,
    },

    /// The returned vector does not have the configured dimension.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Configured dimension.
        expected: usize,
        /// Dimension returned by the backend.
        actual: usize,
    },

    /// The backend was asked to embed empty text.
    #[error("Cannot embed empty text")]
    EmptyInput,
}

/// Corpus storage errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No corpus exists at the path yet.
    #[error("Corpus not found: {path}")]
    CorpusNotFound {
        /// The path that was read.
        path: String,
    },

    /// Filesystem operation failed.
    #[error("I/O error on {path}: {message}")]
    Io {
        /// The path involved.
        path: String,
        /// Description of the failure.
        message: String,
    },

    /// The corpus could not be encoded or decoded.
    #[error("Serialization failed: {message}")]
    Serialization {
        /// Description of the failure.
        message: String,
    },
}

impl StorageError {
    /// Returns true when the corpus simply does not exist yet.
    ///
    /// Callers treat this as "no data yet" rather than a failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::CorpusNotFound { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    // Type assertions - verify all errors implement required traits
    assert_impl_all!(AppError: Send, Sync, std::error::Error);
    assert_impl_all!(ConfigError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(CatalogError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(DetectError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(EmbeddingError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(StorageError: Send, Sync, std::error::Error, Clone);

    #[test]
    fn test_app_error_display_config() {
        let err = AppError::Config(ConfigError::InvalidValue {
            var: "CORPUS_PATH".to_string(),
            reason: "must not be empty".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for CORPUS_PATH: must not be empty"
        );
    }

    #[test]
    fn test_app_error_display_storage() {
        let err = AppError::Storage(StorageError::CorpusNotFound {
            path: "data.json".to_string(),
        });
        assert_eq!(err.to_string(), "Storage error: Corpus not found: data.json");
    }

    #[test]
    fn test_malformed_catalog_display() {
        let err = ConfigError::MalformedCatalog {
            reason: "missing entry for groupthink".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed catalog: missing entry for groupthink"
        );
    }

    #[test]
    fn test_detect_error_from_embedding() {
        let err: DetectError = EmbeddingError::Timeout { timeout_ms: 500 }.into();
        assert_eq!(
            err.to_string(),
            "Semantic analysis failed: Request timeout after 500ms"
        );
    }

    #[test]
    fn test_invalid_input_distinct_from_embedding_failure() {
        let invalid = DetectError::InvalidInput {
            reason: "text must not be empty".to_string(),
        };
        let failed = DetectError::Embedding(EmbeddingError::Network {
            message: "refused".to_string(),
        });
        assert_ne!(invalid, failed);
        assert!(matches!(invalid, DetectError::InvalidInput { .. }));
    }

    #[test]
    fn test_app_error_from_detect_error() {
        let app_err: AppError = DetectError::InvalidInput {
            reason: "empty".to_string(),
        }
        .into();
        assert!(matches!(app_err, AppError::Detect(_)));
    }

    #[test]
    fn test_app_error_from_catalog_error() {
        let app_err: AppError = CatalogError::UnknownKind {
            kind: "halo_effect".to_string(),
        }
        .into();
        assert_eq!(app_err.to_string(), "Catalog error: Unknown bias kind: halo_effect");
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = EmbeddingError::DimensionMismatch {
            expected: 384,
            actual: 768,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 384, got 768");
    }

    #[test]
    fn test_storage_error_is_not_found() {
        assert!(StorageError::CorpusNotFound {
            path: "x".to_string()
        }
        .is_not_found());
        assert!(!StorageError::Io {
            path: "x".to_string(),
            message: "denied".to_string()
        }
        .is_not_found());
    }
}
