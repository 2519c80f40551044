//! Test utilities and fixtures.
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use crate::catalog::PatternCatalog;
use crate::config::{BiasContext, Config};

/// A text that trips confirmation bias and the availability heuristic.
pub const INVESTMENT_TEXT: &str = "Based on recent trends, this investment will definitely \
                                   succeed. Everyone knows the market always goes up.";

/// The built-in catalog behind an `Arc`.
#[must_use]
pub fn builtin_catalog() -> Arc<PatternCatalog> {
    Arc::new(PatternCatalog::builtin().expect("built-in catalog must load"))
}

/// Default configuration with the local embedder.
#[must_use]
pub fn test_config() -> Config {
    Config::default()
}

/// Context over [`test_config`].
#[must_use]
pub fn test_context() -> BiasContext {
    BiasContext::new(test_config()).expect("default config must be valid")
}

/// Context whose generator is seeded.
#[must_use]
pub fn seeded_context(seed: u64) -> BiasContext {
    let mut config = test_config();
    config.generator_seed = Some(seed);
    BiasContext::new(config).expect("default config must be valid")
}
