//! Rule-based recommendation and policy generation.
//!
//! All decision surfaces here are lookup tables over enums, not branching
//! control flow: tier → base recommendations, tier → policy bundles,
//! incident type/severity → response steps, sensitivity → algorithms.

mod adaptive;
mod algorithm;
mod incident;
mod keystrength;
mod posture;
mod recommend;

pub use adaptive::{adaptive_bundle, DomainPolicy, PolicyBundle};
pub use algorithm::{recommend_algorithms, AlgorithmRecommendation};
pub use incident::{
    estimate_resolution_time, response_plan, IncidentContext, ResponseStep,
};
pub use keystrength::{rate_key_strength, KeyParameters, KeyStrengthReport};
pub use posture::{assess_posture, PostureFinding, PostureReport, SystemInfo};
pub use recommend::{base_recommendations, factor_additions, risk_recommendations};

use serde::{Deserialize, Serialize};

/// Execution priority of a recommended step. List order encodes execution
/// sequence; priorities are labels, not a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Immediate,
    High,
    Medium,
    Low,
}

/// A single human-readable, ordered action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub action: String,
    pub justification: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Priority::Immediate).unwrap(),
            "\"immediate\""
        );
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"low\"");
    }
}
