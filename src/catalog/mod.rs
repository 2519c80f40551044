//! Pattern catalog.
//!
//! This module provides:
//! - [`BiasKind`] and [`SeverityLevel`], the closed vocabulary shared by every matcher
//! - [`PatternEntry`], the keyword/phrase/severity record per kind
//! - [`PatternCatalog`], the read-only, load-once lookup table
//!
//! The built-in catalog is a structured JSON definition compiled into the
//! binary. A replacement can be loaded from disk at startup; any defect in
//! it is a fatal [`ConfigError::MalformedCatalog`].
//!
//! # Example
//!
//! ```
//! use bias_lens::catalog::{BiasKind, PatternCatalog, SeverityLevel};
//!
//! let catalog = PatternCatalog::builtin().unwrap();
//! let entry = catalog.lookup(BiasKind::SurvivorshipBias).unwrap();
//! assert_eq!(entry.severity, SeverityLevel::Critical);
//! assert_eq!(catalog.all_kinds().len(), 6);
//! ```

mod types;

pub use types::{BiasKind, PatternEntry, SeverityLevel};

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{CatalogError, ConfigError};

/// The compiled-in catalog definition.
const BUILTIN_CATALOG: &str = include_str!("patterns.json");

/// Read-only mapping from bias kind to its pattern entry.
///
/// Construct once at startup and share behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCatalog {
    entries: BTreeMap<BiasKind, PatternEntry>,
}

impl PatternCatalog {
    /// Load the compiled-in catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedCatalog`] if the definition is invalid.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from its JSON definition.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedCatalog`] if the JSON does not parse,
    /// names an unknown kind, omits a kind, or contains an unusable entry.
    pub fn from_json(definition: &str) -> Result<Self, ConfigError> {
        let entries: BTreeMap<BiasKind, PatternEntry> = serde_json::from_str(definition)
            .map_err(|e| ConfigError::MalformedCatalog {
                reason: e.to_string(),
            })?;
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog definition from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedCatalog`] if the file cannot be read
    /// or its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let definition =
            std::fs::read_to_string(path).map_err(|e| ConfigError::MalformedCatalog {
                reason: format!("cannot read {}: {e}", path.display()),
            })?;
        Self::from_json(&definition)
    }

    /// Look up the entry for a kind.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownKind`] if the kind has no entry.
    pub fn lookup(&self, kind: BiasKind) -> Result<&PatternEntry, CatalogError> {
        self.entries
            .get(&kind)
            .ok_or_else(|| CatalogError::UnknownKind {
                kind: kind.to_string(),
            })
    }

    /// Every kind in the catalog, in catalog order.
    #[must_use]
    pub fn all_kinds(&self) -> Vec<BiasKind> {
        self.entries.keys().copied().collect()
    }

    /// Iterate over `(kind, entry)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (BiasKind, &PatternEntry)> {
        self.entries.iter().map(|(kind, entry)| (*kind, entry))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for kind in BiasKind::ALL {
            let entry = self
                .entries
                .get(&kind)
                .ok_or_else(|| ConfigError::MalformedCatalog {
                    reason: format!("missing entry for {kind}"),
                })?;

            if entry.description.trim().is_empty() {
                return Err(ConfigError::MalformedCatalog {
                    reason: format!("{kind} has an empty description"),
                });
            }
            if entry.keywords.is_empty() && entry.phrases.is_empty() {
                return Err(ConfigError::MalformedCatalog {
                    reason: format!("{kind} defines neither keywords nor phrases"),
                });
            }
            if entry
                .keywords
                .iter()
                .chain(&entry.phrases)
                .any(|pattern| pattern.trim().is_empty())
            {
                // An empty pattern would match every input.
                return Err(ConfigError::MalformedCatalog {
                    reason: format!("{kind} contains a blank pattern"),
                });
            }
        }
        Ok(())
    }
}
