//! Corpus persistence.
//!
//! This module provides:
//! - [`CorpusStore`]: the synthetic corpus as a pretty-printed JSON array
//!
//! A missing file is reported as [`StorageError::CorpusNotFound`] so callers
//! can treat it as "no corpus yet"; [`CorpusStore::load_or_empty`] does that
//! for them.
//!
//! # Example
//!
//! ```ignore
//! use bias_lens::storage::CorpusStore;
//!
//! let store = CorpusStore::new("./data/bias_training_data.json");
//! let examples = store.load_or_empty().await?;
//! store.save(&examples).await?;
//! ```
//!
//! [`StorageError::CorpusNotFound`]: crate::error::StorageError::CorpusNotFound

mod corpus;

pub use corpus::CorpusStore;
