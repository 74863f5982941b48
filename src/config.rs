//! Engine configuration. Scoring weights and ensemble hyperparameters are
//! configuration, not embedded literals, so policy tuning needs no code change.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Risk aggregation weights and tier thresholds
    pub risk: RiskConfig,
    /// Ensemble outlier-scoring hyperparameters
    pub anomaly: AnomalyConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    pub weights: RiskWeights,
    /// Score strictly above this is HIGH
    pub high_threshold: f64,
    /// Score strictly above this is MEDIUM
    pub medium_threshold: f64,
    /// Individual factor value above this triggers a factor-specific recommendation
    pub factor_alert_threshold: f64,
}

/// Linear weights over the canonical 8-factor schema. Defaults sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskWeights {
    pub user_behavior: f64,
    pub system_vulnerability: f64,
    pub network_threat: f64,
    pub data_sensitivity: f64,
    pub access_frequency: f64,
    pub geographical_risk: f64,
    pub time_based_risk: f64,
    pub device_trust: f64,
}

impl RiskWeights {
    /// Weights in canonical schema order (see `features::RISK_FACTOR_NAMES`).
    pub fn as_vec(&self) -> [f64; 8] {
        [
            self.user_behavior,
            self.system_vulnerability,
            self.network_threat,
            self.data_sensitivity,
            self.access_frequency,
            self.geographical_risk,
            self.time_based_risk,
            self.device_trust,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyConfig {
    /// Number of random partition trees in the ensemble
    pub trees: usize,
    /// Per-tree subsample ceiling
    pub max_samples: usize,
    /// Expected outlier fraction, fixed at construction
    pub contamination: f64,
    /// RNG seed; identical batches score identically under the same seed
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            weights: RiskWeights::default(),
            high_threshold: 0.7,
            medium_threshold: 0.4,
            factor_alert_threshold: 0.7,
        }
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            user_behavior: 0.15,
            system_vulnerability: 0.20,
            network_threat: 0.15,
            data_sensitivity: 0.10,
            access_frequency: 0.10,
            geographical_risk: 0.10,
            time_based_risk: 0.10,
            device_trust: 0.10,
        }
    }
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            trees: 100,
            max_samples: 256,
            contamination: 0.1,
            seed: 42,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl EngineConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<EngineConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let sum: f64 = RiskWeights::default().as_vec().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn load_missing_file_falls_back_to_default() {
        let c = EngineConfig::load(std::path::Path::new("nonexistent.json"));
        assert_eq!(c.anomaly.trees, 100);
        assert!((c.anomaly.contamination - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = EngineConfig::default();
        config.anomaly.seed = 7;
        config.risk.high_threshold = 0.8;
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = EngineConfig::load(&path);
        assert_eq!(loaded.anomaly.seed, 7);
        assert!((loaded.risk.high_threshold - 0.8).abs() < f64::EPSILON);
    }
}
