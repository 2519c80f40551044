//! Service response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::correct::CorrectionResult;
use crate::detect::DetectionResult;
use crate::synthetic::SyntheticExample;

/// Combined detection and correction for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique id of this analysis.
    pub analysis_id: Uuid,
    /// When the analysis ran.
    pub timestamp: DateTime<Utc>,
    /// The detection verdict.
    pub detection: DetectionResult,
    /// Present only when at least one bias was detected.
    pub correction: Option<CorrectionResult>,
}

/// Outcome of one generation batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// The examples generated by this call.
    pub examples: Vec<SyntheticExample>,
    /// Size of the in-memory corpus afterwards.
    pub total: usize,
}
