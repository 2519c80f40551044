//! Bias kinds, severity levels and catalog entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A cognitive bias category recognized by the catalog.
///
/// The declaration order is the catalog order: lexical matching walks
/// kinds in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasKind {
    /// Overconfident assertions without evidence.
    ConfirmationBias,
    /// Overweighting recent or memorable information.
    AvailabilityHeuristic,
    /// Over-reliance on initial information.
    AnchoringBias,
    /// Ignoring failures, focusing only on successes.
    SurvivorshipBias,
    /// Disproportionate weight on recent data.
    RecencyBias,
    /// Suppressing alternative viewpoints.
    Groupthink,
}

impl BiasKind {
    /// Every kind, in catalog order.
    pub const ALL: [Self; 6] = [
        Self::ConfirmationBias,
        Self::AvailabilityHeuristic,
        Self::AnchoringBias,
        Self::SurvivorshipBias,
        Self::RecencyBias,
        Self::Groupthink,
    ];

    /// The snake_case identifier used in catalogs and corpora.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConfirmationBias => "confirmation_bias",
            Self::AvailabilityHeuristic => "availability_heuristic",
            Self::AnchoringBias => "anchoring_bias",
            Self::SurvivorshipBias => "survivorship_bias",
            Self::RecencyBias => "recency_bias",
            Self::Groupthink => "groupthink",
        }
    }
}

impl fmt::Display for BiasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BiasKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| CatalogError::UnknownKind {
                kind: s.to_string(),
            })
    }
}

/// Qualitative weight of a bias kind, totally ordered for max-aggregation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    /// Minor impact on reasoning.
    #[default]
    Low,
    /// Noticeable impact.
    Medium,
    /// Significant impact on conclusions.
    High,
    /// Conclusions are likely wrong.
    Critical,
}

impl SeverityLevel {
    /// The lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog record for one bias kind.
///
/// A kind may define only keywords; `phrases` defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternEntry {
    /// Single words or short fragments that signal the bias.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Longer framing phrases that signal the bias.
    #[serde(default)]
    pub phrases: Vec<String>,
    /// Severity assigned to every detection of this kind.
    pub severity: SeverityLevel,
    /// One-line human description.
    pub description: String,
}
