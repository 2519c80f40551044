//! Configuration validation.
//!
//! This module provides validation logic for configuration values,
//! ensuring they are within acceptable ranges.

use super::Config;
use crate::error::ConfigError;

/// Minimum allowed embedding timeout in milliseconds (100 ms).
pub const MIN_TIMEOUT_MS: u64 = 100;

/// Maximum allowed embedding timeout in milliseconds (5 minutes).
pub const MAX_TIMEOUT_MS: u64 = 300_000;

/// Smallest supported embedding width.
pub const MIN_DIMENSIONS: usize = 16;

/// Largest supported embedding width.
pub const MAX_DIMENSIONS: usize = 4096;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if any value is out of range:
/// - `CORPUS_PATH` must not be empty
/// - `LOG_LEVEL` must be a valid log filter directive
/// - `SEMANTIC_THRESHOLD` must be in (0, 1]
/// - `EMBEDDING_URL` must be an http(s) URL
/// - `EMBEDDING_TIMEOUT_MS` must be between 100 and 300000
/// - `EMBEDDING_DIMENSIONS` must be between 16 and 4096
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.corpus_path.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "CORPUS_PATH".into(),
            reason: "must not be empty".into(),
        });
    }

    if tracing_subscriber::EnvFilter::try_new(&config.log_level).is_err() {
        return Err(ConfigError::InvalidValue {
            var: "LOG_LEVEL".into(),
            reason: format!("'{}' is not a valid log filter", config.log_level),
        });
    }

    // Cosine similarity never exceeds 1, so a threshold above it disables matching
    if !(config.semantic_threshold > 0.0 && config.semantic_threshold <= 1.0) {
        return Err(ConfigError::InvalidValue {
            var: "SEMANTIC_THRESHOLD".into(),
            reason: "must be greater than 0 and at most 1".into(),
        });
    }

    if let Some(url) = &config.embedding_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                var: "EMBEDDING_URL".into(),
                reason: "must start with http:// or https://".into(),
            });
        }
    }

    if config.embedding_timeout_ms < MIN_TIMEOUT_MS || config.embedding_timeout_ms > MAX_TIMEOUT_MS
    {
        return Err(ConfigError::InvalidValue {
            var: "EMBEDDING_TIMEOUT_MS".into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
        });
    }

    if config.embedding_dimensions < MIN_DIMENSIONS || config.embedding_dimensions > MAX_DIMENSIONS
    {
        return Err(ConfigError::InvalidValue {
            var: "EMBEDDING_DIMENSIONS".into(),
            reason: format!("must be between {MIN_DIMENSIONS} and {MAX_DIMENSIONS}"),
        });
    }

    Ok(())
}
