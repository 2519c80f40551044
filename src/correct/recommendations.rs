//! Remediation advice per bias kind.

use crate::catalog::BiasKind;

/// Advice table in emission order.
const RECOMMENDATIONS: [(BiasKind, &[&str]); 6] = [
    (
        BiasKind::ConfirmationBias,
        &[
            "Include counter-evidence and alternative explanations",
            "Replace absolute language with probability ranges",
        ],
    ),
    (
        BiasKind::AvailabilityHeuristic,
        &[
            "Reference historical data, not just recent events",
            "Acknowledge that memorable ≠ representative",
        ],
    ),
    (
        BiasKind::SurvivorshipBias,
        &[
            "Include failure rates and unsuccessful cases",
            "Present base rates and selection effects",
        ],
    ),
    (
        BiasKind::AnchoringBias,
        &[
            "Consider multiple reference points",
            "Justify why initial value is appropriate",
        ],
    ),
    (
        BiasKind::RecencyBias,
        &["Weight historical patterns equally with recent data"],
    ),
    (
        BiasKind::Groupthink,
        &[
            "Present contrarian viewpoints",
            "Explain why consensus might be wrong",
        ],
    ),
];

/// Recommendations for the given kinds.
///
/// Output order is fixed (confirmation, availability, survivorship,
/// anchoring, recency, groupthink) whatever order the kinds arrive in, and
/// repeated kinds contribute once.
#[must_use]
pub fn recommendations_for(kinds: &[BiasKind]) -> Vec<String> {
    RECOMMENDATIONS
        .iter()
        .filter(|(kind, _)| kinds.contains(kind))
        .flat_map(|(_, advice)| advice.iter().map(|line| (*line).to_string()))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_kinds() {
        assert!(recommendations_for(&[]).is_empty());
    }

    #[test]
    fn test_every_kind_has_advice() {
        for kind in BiasKind::ALL {
            assert!(!recommendations_for(&[kind]).is_empty(), "{kind}");
        }
    }

    #[test]
    fn test_order_independent_of_input() {
        let forward = recommendations_for(&[BiasKind::ConfirmationBias, BiasKind::Groupthink]);
        let reverse = recommendations_for(&[BiasKind::Groupthink, BiasKind::ConfirmationBias]);
        assert_eq!(forward, reverse);
        assert_eq!(
            forward,
            vec![
                "Include counter-evidence and alternative explanations",
                "Replace absolute language with probability ranges",
                "Present contrarian viewpoints",
                "Explain why consensus might be wrong",
            ]
        );
    }

    #[test]
    fn test_survivorship_before_anchoring() {
        let lines = recommendations_for(&[BiasKind::AnchoringBias, BiasKind::SurvivorshipBias]);
        assert_eq!(lines[0], "Include failure rates and unsuccessful cases");
        assert_eq!(lines[2], "Consider multiple reference points");
    }

    #[test]
    fn test_duplicates_contribute_once() {
        let lines = recommendations_for(&[BiasKind::RecencyBias, BiasKind::RecencyBias]);
        assert_eq!(lines, vec!["Weight historical patterns equally with recent data"]);
    }

    #[test]
    fn test_all_kinds() {
        assert_eq!(recommendations_for(&BiasKind::ALL).len(), 11);
    }
}
