//! Behavioral pattern analysis: per-user risk from access frequency and data
//! volume.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

fn default_user_id() -> String {
    "unknown".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPattern {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default)]
    pub frequency: f64,
    #[serde(default)]
    pub data_volume: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRiskAnalysis {
    pub user_id: String,
    pub risk_score: f64,
    pub is_suspicious: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralReport {
    pub analysis: Vec<UserRiskAnalysis>,
    pub total_users: usize,
    pub suspicious_activities: usize,
}

const FREQUENCY_WEIGHT: f64 = 0.01;
const VOLUME_WEIGHT: f64 = 0.0001;
const SUSPICIOUS_THRESHOLD: f64 = 0.7;

/// `risk_score = min(1, frequency*0.01 + data_volume*0.0001)`, suspicious
/// strictly above 0.7. Empty input is a validation error.
pub fn analyze_patterns(patterns: &[UserPattern]) -> Result<BehavioralReport> {
    if patterns.is_empty() {
        return Err(EngineError::validation("No user patterns provided"));
    }

    let analysis: Vec<UserRiskAnalysis> = patterns
        .iter()
        .map(|p| {
            let risk_score =
                (p.frequency * FREQUENCY_WEIGHT + p.data_volume * VOLUME_WEIGHT).min(1.0);
            UserRiskAnalysis {
                user_id: p.user_id.clone(),
                risk_score,
                is_suspicious: risk_score > SUSPICIOUS_THRESHOLD,
            }
        })
        .collect();

    let suspicious_activities = analysis.iter().filter(|a| a.is_suspicious).count();
    Ok(BehavioralReport {
        total_users: analysis.len(),
        suspicious_activities,
        analysis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(user_id: &str, frequency: f64, data_volume: f64) -> UserPattern {
        UserPattern {
            user_id: user_id.to_string(),
            frequency,
            data_volume,
        }
    }

    #[test]
    fn empty_patterns_rejected() {
        let err = analyze_patterns(&[]).unwrap_err();
        assert_eq!(err.public_message(), "No user patterns provided");
    }

    #[test]
    fn risk_score_formula_and_cap() {
        let report = analyze_patterns(&[
            pattern("alice", 10.0, 100.0),
            pattern("mallory", 200.0, 50_000.0),
        ])
        .unwrap();

        assert!((report.analysis[0].risk_score - 0.11).abs() < 1e-12);
        assert!(!report.analysis[0].is_suspicious);
        // 2.0 + 5.0 capped at 1.0
        assert_eq!(report.analysis[1].risk_score, 1.0);
        assert!(report.analysis[1].is_suspicious);
        assert_eq!(report.total_users, 2);
        assert_eq!(report.suspicious_activities, 1);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let p: UserPattern = serde_json::from_str(r#"{"frequency": 5}"#).unwrap();
        assert_eq!(p.user_id, "unknown");
        assert_eq!(p.data_volume, 0.0);
    }
}
