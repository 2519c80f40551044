//! Merge raw detections into a single verdict.

use super::types::{Detection, DetectionResult, Evidence};
use crate::catalog::{BiasKind, PatternCatalog, SeverityLevel};
use crate::error::CatalogError;

/// Confidence added per raw detection.
pub const CONFIDENCE_PER_DETECTION: usize = 15;

/// Confidence never exceeds this value.
pub const MAX_CONFIDENCE: u8 = 95;

/// Reasoning lines kept per result.
pub const MAX_REASONING: usize = 4;

/// Fuse raw detections, in matcher order, into a [`DetectionResult`].
///
/// Confidence counts every raw detection, so repeated hits for one kind raise
/// it. Severity is the highest catalog severity among the detected kinds.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownKind`] if a detected kind has no entry.
pub fn fuse(
    text: &str,
    detections: Vec<Detection>,
    catalog: &PatternCatalog,
) -> Result<DetectionResult, CatalogError> {
    if detections.is_empty() {
        return Ok(DetectionResult::empty(text));
    }

    let mut kinds: Vec<BiasKind> = Vec::new();
    for detection in &detections {
        if !kinds.contains(&detection.kind) {
            kinds.push(detection.kind);
        }
    }

    let mut severity = SeverityLevel::Low;
    for kind in &kinds {
        severity = severity.max(catalog.lookup(*kind)?.severity);
    }

    let reasoning = detections
        .iter()
        .take(MAX_REASONING)
        .map(|d| render_reasoning(d, catalog))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DetectionResult {
        text: text.to_string(),
        biases_detected: kinds,
        confidence: confidence_for(detections.len()),
        severity,
        reasoning,
        detections,
    })
}

/// Confidence for a number of raw detections: 15 each, capped at 95.
#[must_use]
pub fn confidence_for(raw_count: usize) -> u8 {
    let scaled = raw_count
        .saturating_mul(CONFIDENCE_PER_DETECTION)
        .min(usize::from(MAX_CONFIDENCE));
    u8::try_from(scaled).unwrap_or(MAX_CONFIDENCE)
}

fn render_reasoning(detection: &Detection, catalog: &PatternCatalog) -> Result<String, CatalogError> {
    let description = catalog.lookup(detection.kind)?.description.to_lowercase();
    Ok(match &detection.evidence {
        Evidence::Match(snippet) => format!(
            "Detected {description} through {} analysis: '{snippet}'",
            detection.method
        ),
        Evidence::Similarity(_) => {
            format!("Detected {description} through {} analysis", detection.method)
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::detect::types::DetectionMethod;
    use crate::test_utils::builtin_catalog;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn keyword(kind: BiasKind, snippet: &str) -> Detection {
        Detection::matched(kind, DetectionMethod::Keyword, snippet, SeverityLevel::Low)
    }

    #[test]
    fn test_no_detections() {
        let result = fuse("calm text", Vec::new(), &builtin_catalog()).unwrap();
        assert_eq!(result, DetectionResult::empty("calm text"));
    }

    #[test_case(0, 0)]
    #[test_case(1, 15)]
    #[test_case(6, 90)]
    #[test_case(7, 95)]
    #[test_case(1000, 95)]
    #[test_case(usize::MAX, 95)]
    fn test_confidence_for(count: usize, expected: u8) {
        assert_eq!(confidence_for(count), expected);
    }

    #[test]
    fn test_kinds_deduplicated_in_first_seen_order() {
        let detections = vec![
            keyword(BiasKind::RecencyBias, "latest"),
            keyword(BiasKind::ConfirmationBias, "always"),
            keyword(BiasKind::RecencyBias, "yesterday"),
        ];
        let result = fuse("t", detections, &builtin_catalog()).unwrap();
        assert_eq!(
            result.biases_detected,
            vec![BiasKind::RecencyBias, BiasKind::ConfirmationBias]
        );
        assert_eq!(result.confidence, 45);
        assert_eq!(result.detections.len(), 3);
    }

    #[test]
    fn test_severity_from_catalog_not_detection() {
        // The detection claims low, the catalog says critical
        let detections = vec![keyword(BiasKind::SurvivorshipBias, "winners")];
        let result = fuse("t", detections, &builtin_catalog()).unwrap();
        assert_eq!(result.severity, SeverityLevel::Critical);
    }

    #[test]
    fn test_medium_only_severity() {
        let detections = vec![
            keyword(BiasKind::AnchoringBias, "compared to"),
            keyword(BiasKind::Groupthink, "consensus is"),
        ];
        let result = fuse("t", detections, &builtin_catalog()).unwrap();
        assert_eq!(result.severity, SeverityLevel::Medium);
    }

    #[test]
    fn test_reasoning_format_and_limit() {
        let detections = vec![
            keyword(BiasKind::ConfirmationBias, "always"),
            Detection::semantic(BiasKind::SurvivorshipBias, 0.8, SeverityLevel::Critical),
            keyword(BiasKind::RecencyBias, "latest"),
            keyword(BiasKind::RecencyBias, "yesterday"),
            keyword(BiasKind::Groupthink, "consensus is"),
        ];
        let result = fuse("t", detections, &builtin_catalog()).unwrap();
        assert_eq!(
            result.reasoning,
            vec![
                "Detected overconfident assertions without evidence through keyword analysis: 'always'",
                "Detected ignoring failures, focusing only on successes through semantic analysis",
                "Detected disproportionate weight on recent data through keyword analysis: 'latest'",
                "Detected disproportionate weight on recent data through keyword analysis: 'yesterday'",
            ]
        );
        assert_eq!(result.confidence, 75);
    }
}
