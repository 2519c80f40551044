//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with `.env` support)
//! - Configuration validation
//! - Default value handling
//! - Catalog loading, the one fatal startup step
//! - The shared [`BiasContext`] handed to every component
//!
//! # Example
//!
//! ```
//! use bias_lens::config::{Config, DEFAULT_SEMANTIC_THRESHOLD};
//!
//! // Use Config::from_env() in production
//! let config = Config::default();
//! assert_eq!(config.semantic_threshold, DEFAULT_SEMANTIC_THRESHOLD);
//! assert!(config.embedding_url.is_none());
//! ```

mod secret;
mod validation;

pub use secret::SecretString;
pub use validation::{
    validate_config, MAX_DIMENSIONS, MAX_TIMEOUT_MS, MIN_DIMENSIONS, MIN_TIMEOUT_MS,
};

use std::sync::Arc;

use crate::catalog::PatternCatalog;
use crate::embedding::{DEFAULT_DIMENSIONS, DEFAULT_EMBEDDING_MODEL};
use crate::error::ConfigError;

/// Default corpus path.
pub const DEFAULT_CORPUS_PATH: &str = "./data/bias_training_data.json";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default similarity above which a semantic match is reported.
pub const DEFAULT_SEMANTIC_THRESHOLD: f32 = 0.65;

/// Default embedding request timeout in milliseconds.
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 30_000;

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
/// The embedding token uses [`SecretString`] to prevent accidental logging.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path of the persisted synthetic corpus.
    pub corpus_path: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Optional replacement catalog definition.
    pub catalog_path: Option<String>,
    /// Similarity threshold for semantic detections.
    pub semantic_threshold: f32,
    /// Remote embedding service base URL; `None` selects the local embedder.
    pub embedding_url: Option<String>,
    /// Remote embedding service token.
    pub embedding_api_key: Option<SecretString>,
    /// Remote embedding model name.
    pub embedding_model: String,
    /// Remote embedding request timeout in milliseconds.
    pub embedding_timeout_ms: u64,
    /// Embedding vector width.
    pub embedding_dimensions: usize,
    /// Seed for the synthetic example generator; `None` seeds from entropy.
    pub generator_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: DEFAULT_CORPUS_PATH.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            catalog_path: None,
            semantic_threshold: DEFAULT_SEMANTIC_THRESHOLD,
            embedding_url: None,
            embedding_api_key: None,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_timeout_ms: DEFAULT_EMBEDDING_TIMEOUT_MS,
            embedding_dimensions: DEFAULT_DIMENSIONS,
            generator_seed: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `CORPUS_PATH`: Synthetic corpus file (default: `./data/bias_training_data.json`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `CATALOG_PATH`: Replacement catalog JSON (default: built-in catalog)
    /// - `SEMANTIC_THRESHOLD`: Similarity threshold (default: `0.65`)
    /// - `EMBEDDING_URL`: Remote embedding service (default: local hashing embedder)
    /// - `EMBEDDING_API_KEY`: Bearer token for the remote service (ignored when empty)
    /// - `EMBEDDING_MODEL`: Remote model name (default: `all-MiniLM-L6-v2`)
    /// - `EMBEDDING_TIMEOUT_MS`: Remote request timeout (default: `30000`)
    /// - `EMBEDDING_DIMENSIONS`: Vector width (default: `384`)
    /// - `GENERATOR_SEED`: Seed for reproducible corpora
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a numeric variable does not parse or any
    /// value fails validation (see [`validate_config`]).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let config = Self {
            corpus_path: std::env::var("CORPUS_PATH")
                .unwrap_or_else(|_| DEFAULT_CORPUS_PATH.into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into()),
            catalog_path: std::env::var("CATALOG_PATH").ok(),
            semantic_threshold: parse_env("SEMANTIC_THRESHOLD", DEFAULT_SEMANTIC_THRESHOLD)?,
            embedding_url: std::env::var("EMBEDDING_URL").ok(),
            embedding_api_key: std::env::var("EMBEDDING_API_KEY")
                .ok()
                .map(SecretString::new)
                .filter(|key| !key.is_empty()),
            embedding_model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.into()),
            embedding_timeout_ms: parse_env("EMBEDDING_TIMEOUT_MS", DEFAULT_EMBEDDING_TIMEOUT_MS)?,
            embedding_dimensions: parse_env("EMBEDDING_DIMENSIONS", DEFAULT_DIMENSIONS)?,
            generator_seed: parse_optional_env("GENERATOR_SEED")?,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Load the pattern catalog this configuration points at.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedCatalog`] if the catalog is unusable.
    pub fn load_catalog(&self) -> Result<PatternCatalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => PatternCatalog::from_path(path),
            None => PatternCatalog::builtin(),
        }
    }
}

/// Process-wide read-only state, built once at startup and passed by handle.
#[derive(Debug, Clone)]
pub struct BiasContext {
    /// The pattern catalog shared by every matcher.
    pub catalog: Arc<PatternCatalog>,
    /// The loaded configuration.
    pub config: Arc<Config>,
}

impl BiasContext {
    /// Build a context, loading the catalog named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid or the
    /// catalog is malformed.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        validate_config(&config)?;
        let catalog = config.load_catalog()?;
        Ok(Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        })
    }
}

/// Parse an environment variable, using a default if not set.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    parse_optional_env(name).map(|value| value.unwrap_or(default))
}

/// Parse an environment variable that has no default.
fn parse_optional_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    std::env::var(name).map_or(Ok(None), |val| {
        val.trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                var: name.into(),
                reason: format!("cannot parse '{val}'"),
            })
    })
}
