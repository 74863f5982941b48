//! Linear risk aggregation: weighted factor sum, clamped to [0, 1], mapped to
//! a discrete tier. Intentionally a simple auditable scorer so results are
//! explainable to an operator; a learned classifier could sit behind the same
//! contract without touching callers.

use crate::config::RiskConfig;
use crate::features::{risk_factor_schema, FactorSchema, NEUTRAL_DEFAULT};
use crate::policy::{self, Recommendation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Thresholds are evaluated high-to-low; boundary scores land on the
    /// lower tier (score == high_threshold is MEDIUM, not HIGH).
    pub fn from_score(score: f64, config: &RiskConfig) -> Self {
        if score > config.high_threshold {
            RiskLevel::High
        } else if score > config.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn action_required(self) -> bool {
        !matches!(self, RiskLevel::Low)
    }

    /// Lenient string mapping: HIGH and MEDIUM by name, anything else LOW.
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "HIGH" => RiskLevel::High,
            "MEDIUM" => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

/// The factor subset echoed back in every assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportedFactors {
    pub user_behavior: f64,
    pub system_vulnerability: f64,
    pub network_threat: f64,
    pub data_sensitivity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub action_required: bool,
    pub factors: ReportedFactors,
    pub recommendations: Vec<Recommendation>,
}

pub struct RiskEngine {
    config: RiskConfig,
    schema: FactorSchema,
}

impl RiskEngine {
    pub fn new(config: RiskConfig) -> Self {
        Self {
            config,
            schema: risk_factor_schema(),
        }
    }

    /// Score a factor set. Missing factors are neutral; the score is clamped
    /// to [0, 1] regardless of input magnitudes.
    pub fn assess(&self, factors: &HashMap<String, f64>) -> RiskAssessment {
        let vector = self.schema.vectorize(factors);
        let weights = self.config.weights.as_vec();
        let raw: f64 = vector
            .as_slice()
            .iter()
            .zip(weights.iter())
            .map(|(x, w)| x * w)
            .sum();
        let risk_score = raw.clamp(0.0, 1.0);

        let risk_level = RiskLevel::from_score(risk_score, &self.config);
        let factor = |name: &str| factors.get(name).copied().unwrap_or(NEUTRAL_DEFAULT);

        RiskAssessment {
            risk_score,
            risk_level,
            action_required: risk_level.action_required(),
            factors: ReportedFactors {
                user_behavior: factor("user_behavior_score"),
                system_vulnerability: factor("system_vulnerability_score"),
                network_threat: factor("network_threat_level"),
                data_sensitivity: factor("data_sensitivity_score"),
            },
            recommendations: policy::risk_recommendations(
                risk_level,
                factors,
                self.config.factor_alert_threshold,
            ),
        }
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn neutral_factors_score_half() {
        let engine = RiskEngine::new(RiskConfig::default());
        let assessment = engine.assess(&HashMap::new());
        assert!((assessment.risk_score - 0.5).abs() < 1e-12);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
        assert!(assessment.action_required);
    }

    #[test]
    fn score_clamped_for_oversized_inputs() {
        let engine = RiskEngine::new(RiskConfig::default());
        let assessment = engine.assess(&factors(&[
            ("user_behavior_score", 50.0),
            ("system_vulnerability_score", 50.0),
        ]));
        assert_eq!(assessment.risk_score, 1.0);
        assert_eq!(assessment.risk_level, RiskLevel::High);
    }

    #[test]
    fn tier_boundaries_land_on_lower_tier() {
        let config = RiskConfig::default();
        assert_eq!(RiskLevel::from_score(0.7, &config), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(0.4, &config), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.700001, &config), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(0.0, &config), RiskLevel::Low);
    }

    #[test]
    fn low_risk_requires_no_action() {
        let engine = RiskEngine::new(RiskConfig::default());
        let all_low: HashMap<String, f64> = crate::features::RISK_FACTOR_NAMES
            .iter()
            .map(|name| (name.to_string(), 0.1))
            .collect();
        let assessment = engine.assess(&all_low);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert!(!assessment.action_required);
    }

    #[test]
    fn recommendations_keep_base_before_additions() {
        let engine = RiskEngine::new(RiskConfig::default());
        let assessment = engine.assess(&factors(&[
            ("user_behavior_score", 0.9),
            ("system_vulnerability_score", 0.9),
            ("network_threat_level", 0.9),
            ("data_sensitivity_score", 0.9),
            ("access_frequency", 0.9),
            ("geographical_risk", 0.9),
            ("time_based_risk", 0.9),
            ("device_trust_score", 0.9),
        ]));
        assert_eq!(assessment.risk_level, RiskLevel::High);
        let actions: Vec<&str> = assessment
            .recommendations
            .iter()
            .map(|r| r.action.as_str())
            .collect();
        assert_eq!(
            actions,
            [
                "Restrict user access pending investigation",
                "Initiate security incident response procedure",
                "Review network security controls",
                "Patch vulnerable systems immediately",
            ]
        );
    }

    #[test]
    fn risk_level_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"HIGH\"");
        assert_eq!(RiskLevel::parse_lenient("MEDIUM"), RiskLevel::Medium);
        assert_eq!(RiskLevel::parse_lenient("garbage"), RiskLevel::Low);
    }
}
