//! Key-strength rating from key length and algorithm.

use serde::{Deserialize, Serialize};

fn default_algorithm() -> String {
    "unknown".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyParameters {
    #[serde(default)]
    pub length: u64,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default)]
    pub entropy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyStrengthReport {
    pub strength_score: f64,
    pub rating: String,
    pub recommendations: Vec<String>,
}

const STRONG_ALGORITHMS: [&str; 2] = ["AES-256-GCM", "ChaCha20-Poly1305"];
const ADEQUATE_THRESHOLD: f64 = 0.8;

const HARDENING_RECOMMENDATIONS: [&str; 2] = [
    "Use keys of at least 256 bits for symmetric encryption",
    "Consider quantum-resistant algorithms for long-term security",
];
const ADEQUATE_RECOMMENDATION: &str =
    "Key strength is adequate for current security requirements";

pub fn rate_key_strength(params: &KeyParameters) -> KeyStrengthReport {
    let (strength_score, rating) =
        if params.length >= 256 && STRONG_ALGORITHMS.contains(&params.algorithm.as_str()) {
            (0.95, "Strong")
        } else if params.length >= 128 {
            (0.75, "Good")
        } else {
            (0.3, "Weak")
        };

    let recommendations = if strength_score < ADEQUATE_THRESHOLD {
        HARDENING_RECOMMENDATIONS
            .iter()
            .map(|r| r.to_string())
            .collect()
    } else {
        vec![ADEQUATE_RECOMMENDATION.to_string()]
    };

    KeyStrengthReport {
        strength_score,
        rating: rating.to_string(),
        recommendations,
    }
}
