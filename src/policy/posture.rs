//! Cryptographic posture checks: rotation policy, weak algorithms,
//! quantum readiness.

use serde::{Deserialize, Serialize};

fn default_rotation_days() -> u64 {
    365
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(default = "default_rotation_days")]
    pub key_rotation_days: u64,
    #[serde(default)]
    pub algorithms: Vec<String>,
    #[serde(default)]
    pub quantum_resistant: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostureFinding {
    pub id: String,
    pub severity: String,
    pub description: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostureReport {
    pub vulnerabilities: Vec<PostureFinding>,
    pub total_vulnerabilities: usize,
    pub critical: usize,
    pub high: usize,
}

const MAX_ROTATION_DAYS: u64 = 180;
const WEAK_ALGORITHMS: [&str; 3] = ["DES", "3DES", "RC4"];

pub fn assess_posture(info: &SystemInfo) -> PostureReport {
    let mut vulnerabilities = Vec::new();

    if info.key_rotation_days > MAX_ROTATION_DAYS {
        vulnerabilities.push(PostureFinding {
            id: "KEY_ROTATION_001".to_string(),
            severity: "medium".to_string(),
            description: "Key rotation period is longer than recommended".to_string(),
            recommendation: "Rotate keys every 90 days or less".to_string(),
        });
    }

    for algorithm in &info.algorithms {
        if WEAK_ALGORITHMS.contains(&algorithm.as_str()) {
            vulnerabilities.push(PostureFinding {
                id: "CRYPTO_ALGO_001".to_string(),
                severity: "high".to_string(),
                description: format!("Weak cryptographic algorithm detected: {algorithm}"),
                recommendation: format!("Replace {algorithm} with a stronger algorithm"),
            });
        }
    }

    if !info.quantum_resistant {
        vulnerabilities.push(PostureFinding {
            id: "QUANTUM_001".to_string(),
            severity: "medium".to_string(),
            description: "System not prepared for quantum computing threats".to_string(),
            recommendation: "Implement quantum-resistant cryptography".to_string(),
        });
    }

    // Rollup labels are inherited behavior: "critical" counts high-severity
    // findings and "high" counts medium-severity ones.
    let critical = vulnerabilities.iter().filter(|v| v.severity == "high").count();
    let high = vulnerabilities.iter().filter(|v| v.severity == "medium").count();

    PostureReport {
        total_vulnerabilities: vulnerabilities.len(),
        critical,
        high,
        vulnerabilities,
    }
}
