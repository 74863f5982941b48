//! Encryption algorithm recommendation keyed by data sensitivity and
//! compliance context.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmRecommendation {
    pub algorithm: String,
    pub reason: String,
    pub strength: String,
}

struct AlgoSpec {
    algorithm: &'static str,
    reason: &'static str,
    strength: &'static str,
}

impl From<&AlgoSpec> for AlgorithmRecommendation {
    fn from(spec: &AlgoSpec) -> Self {
        AlgorithmRecommendation {
            algorithm: spec.algorithm.to_string(),
            reason: spec.reason.to_string(),
            strength: spec.strength.to_string(),
        }
    }
}

const HIGH_REGULATED: &[AlgoSpec] = &[
    AlgoSpec {
        algorithm: "AES-256-GCM",
        reason: "Meets HIPAA/GDPR requirements for sensitive data",
        strength: "Very Strong",
    },
    AlgoSpec {
        algorithm: "Kyber-1024",
        reason: "Quantum-resistant algorithm for long-term security",
        strength: "Future-Proof",
    },
];

const HIGH_UNREGULATED: &[AlgoSpec] = &[AlgoSpec {
    algorithm: "ChaCha20-Poly1305",
    reason: "High performance with strong security",
    strength: "Strong",
}];

const MEDIUM_SENSITIVITY: &[AlgoSpec] = &[AlgoSpec {
    algorithm: "AES-192-GCM",
    reason: "Balanced security and performance",
    strength: "Strong",
}];

const LOW_SENSITIVITY: &[AlgoSpec] = &[AlgoSpec {
    algorithm: "AES-128-GCM",
    reason: "Adequate security with optimal performance",
    strength: "Good",
}];

const QUANTUM_FALLBACK: AlgoSpec = AlgoSpec {
    algorithm: "Kyber-768",
    reason: "Quantum-resistant algorithm for forward security",
    strength: "Future-Proof",
};

const REGULATED_FRAMEWORKS: [&str; 2] = ["HIPAA", "GDPR"];

/// Sensitivity × compliance lookup; a quantum-resistant entry is always
/// appended unless one is already present (by "Kyber" substring match on the
/// algorithm name).
pub fn recommend_algorithms(sensitivity: &str, compliance: &[String]) -> Vec<AlgorithmRecommendation> {
    let regulated = compliance
        .iter()
        .any(|f| REGULATED_FRAMEWORKS.contains(&f.as_str()));

    let specs = match (sensitivity, regulated) {
        ("high", true) => HIGH_REGULATED,
        ("high", false) => HIGH_UNREGULATED,
        ("medium", _) => MEDIUM_SENSITIVITY,
        _ => LOW_SENSITIVITY,
    };
    let mut recommendations: Vec<AlgorithmRecommendation> =
        specs.iter().map(AlgorithmRecommendation::from).collect();

    if !recommendations.iter().any(|r| r.algorithm.contains("Kyber")) {
        recommendations.push(AlgorithmRecommendation::from(&QUANTUM_FALLBACK));
    }
    recommendations
}
