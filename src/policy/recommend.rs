//! Risk-tier recommendation tables.
//!
//! Every tier's output begins with its base set; factor-triggered entries are
//! appended after, never re-sorted. Insertion order is the contract.

use super::{Priority, Recommendation};
use crate::risk::RiskLevel;
use std::collections::HashMap;

struct RecommendationSpec {
    priority: Priority,
    action: &'static str,
    justification: &'static str,
}

impl From<&RecommendationSpec> for Recommendation {
    fn from(spec: &RecommendationSpec) -> Self {
        Recommendation {
            priority: spec.priority,
            action: spec.action.to_string(),
            justification: spec.justification.to_string(),
        }
    }
}

const HIGH_BASE: &[RecommendationSpec] = &[
    RecommendationSpec {
        priority: Priority::Immediate,
        action: "Restrict user access pending investigation",
        justification: "High risk score detected",
    },
    RecommendationSpec {
        priority: Priority::High,
        action: "Initiate security incident response procedure",
        justification: "Potential security breach detected",
    },
];

const MEDIUM_BASE: &[RecommendationSpec] = &[
    RecommendationSpec {
        priority: Priority::Medium,
        action: "Increase monitoring frequency for this user/system",
        justification: "Moderate risk level detected",
    },
    RecommendationSpec {
        priority: Priority::Medium,
        action: "Review recent access patterns",
        justification: "Unusual activity detected",
    },
];

const LOW_BASE: &[RecommendationSpec] = &[RecommendationSpec {
    priority: Priority::Low,
    action: "Continue standard monitoring",
    justification: "Risk level within acceptable parameters",
}];

const NETWORK_ADDITION: RecommendationSpec = RecommendationSpec {
    priority: Priority::High,
    action: "Review network security controls",
    justification: "High network threat level detected",
};

const VULNERABILITY_ADDITION: RecommendationSpec = RecommendationSpec {
    priority: Priority::High,
    action: "Patch vulnerable systems immediately",
    justification: "Critical system vulnerabilities detected",
};

fn base_specs(level: RiskLevel) -> &'static [RecommendationSpec] {
    match level {
        RiskLevel::High => HIGH_BASE,
        RiskLevel::Medium => MEDIUM_BASE,
        RiskLevel::Low => LOW_BASE,
    }
}

/// The tier's base action set, always first in any recommendation list.
pub fn base_recommendations(level: RiskLevel) -> Vec<Recommendation> {
    base_specs(level).iter().map(Recommendation::from).collect()
}

/// Factor-triggered additions. Unreported factors count as neutral 0.5.
pub fn factor_additions(
    factors: &HashMap<String, f64>,
    threshold: f64,
) -> Vec<Recommendation> {
    let factor = |name: &str| factors.get(name).copied().unwrap_or(0.5);
    let mut out = Vec::new();
    if factor("network_threat_level") > threshold {
        out.push(Recommendation::from(&NETWORK_ADDITION));
    }
    if factor("system_vulnerability_score") > threshold {
        out.push(Recommendation::from(&VULNERABILITY_ADDITION));
    }
    out
}

/// Base set for the tier followed by factor-triggered additions.
pub fn risk_recommendations(
    level: RiskLevel,
    factors: &HashMap<String, f64>,
    threshold: f64,
) -> Vec<Recommendation> {
    let mut recommendations = base_recommendations(level);
    recommendations.extend(factor_additions(factors, threshold));
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_base_set_has_two_entries_in_order() {
        let recs = base_recommendations(RiskLevel::High);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].priority, Priority::Immediate);
        assert_eq!(recs[0].action, "Restrict user access pending investigation");
        assert_eq!(recs[1].priority, Priority::High);
    }

    #[test]
    fn additions_come_after_base() {
        let mut factors = HashMap::new();
        factors.insert("network_threat_level".to_string(), 0.9);
        factors.insert("system_vulnerability_score".to_string(), 0.8);

        let recs = risk_recommendations(RiskLevel::High, &factors, 0.7);
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[2].action, "Review network security controls");
        assert_eq!(recs[3].action, "Patch vulnerable systems immediately");
    }

    #[test]
    fn threshold_is_strict() {
        let mut factors = HashMap::new();
        factors.insert("network_threat_level".to_string(), 0.7);
        assert!(factor_additions(&factors, 0.7).is_empty());
    }

    #[test]
    fn low_tier_single_entry() {
        let recs = risk_recommendations(RiskLevel::Low, &HashMap::new(), 0.7);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].action, "Continue standard monitoring");
    }
}
