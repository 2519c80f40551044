//! Catalog keyword and phrase matching.

use std::sync::Arc;

use super::types::{Detection, DetectionMethod};
use crate::catalog::PatternCatalog;

/// Case-insensitive substring matcher over the catalog.
#[derive(Debug, Clone)]
pub struct LexicalMatcher {
    catalog: Arc<PatternCatalog>,
}

impl LexicalMatcher {
    /// Create a matcher over the shared catalog.
    #[must_use]
    pub const fn new(catalog: Arc<PatternCatalog>) -> Self {
        Self { catalog }
    }

    /// Emit one detection per matching keyword, then one per matching phrase.
    ///
    /// Several hits for the same kind are all kept; deduplication belongs to
    /// fusion.
    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<Detection> {
        let lower = text.to_lowercase();
        let mut detections = Vec::new();

        for (kind, entry) in self.catalog.iter() {
            for keyword in &entry.keywords {
                if lower.contains(&keyword.to_lowercase()) {
                    detections.push(Detection::matched(
                        kind,
                        DetectionMethod::Keyword,
                        keyword.clone(),
                        entry.severity,
                    ));
                }
            }
        }

        for (kind, entry) in self.catalog.iter() {
            for phrase in &entry.phrases {
                if lower.contains(&phrase.to_lowercase()) {
                    detections.push(Detection::matched(
                        kind,
                        DetectionMethod::Phrase,
                        phrase.clone(),
                        entry.severity,
                    ));
                }
            }
        }

        detections
    }
}
