//! Batch-relative ensemble outlier scoring.
//!
//! Scaler and ensemble are refit on every call; no state survives between
//! batches. Scores are therefore relative to the batch they came from, and
//! callers should batch samples rather than score one at a time.

mod forest;
mod scaler;

pub use forest::IsolationForest;
pub use scaler::StandardScaler;

use crate::config::AnomalyConfig;
use crate::error::{EngineError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-sample verdict. `anomaly_score` is the decision-function value:
/// lower (more negative) means stronger outlier evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyResult {
    pub index: usize,
    pub is_anomaly: bool,
    pub anomaly_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub results: Vec<AnomalyResult>,
    pub total_samples: usize,
    pub anomalies_detected: usize,
}

pub struct AnomalyDetector {
    config: AnomalyConfig,
}

impl AnomalyDetector {
    pub fn new(config: AnomalyConfig) -> Self {
        Self { config }
    }

    /// Score a batch of feature vectors. Empty batches are a validation
    /// error; rank-1 input must be promoted to a single-row batch by the
    /// caller (the service layer does this during payload parsing).
    pub fn detect(&self, batch: &[Vec<f64>]) -> Result<BatchReport> {
        if batch.is_empty() {
            return Err(EngineError::validation("No features provided"));
        }

        let cols = batch[0].len();
        if cols == 0 {
            return Err(EngineError::internal("zero-width feature vectors"));
        }
        if batch.iter().any(|row| row.len() != cols) {
            return Err(EngineError::validation(
                "Feature vectors have mismatched arity",
            ));
        }

        let rows = batch.len();
        let flat: Vec<f64> = batch.iter().flatten().copied().collect();
        let data = Array2::from_shape_vec((rows, cols), flat)
            .map_err(|e| EngineError::internal(e.to_string()))?;

        let scaled = StandardScaler::fit_transform(&data);
        let forest = IsolationForest::fit(&scaled, &self.config);
        let decisions = forest.decision_function(&scaled);

        let results: Vec<AnomalyResult> = decisions
            .iter()
            .enumerate()
            .map(|(index, &score)| AnomalyResult {
                index,
                is_anomaly: score < 0.0,
                anomaly_score: score,
            })
            .collect();
        let anomalies_detected = results.iter().filter(|r| r.is_anomaly).count();
        debug!(total = results.len(), anomalies = anomalies_detected, "batch scored");

        Ok(BatchReport {
            total_samples: results.len(),
            anomalies_detected,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_is_validation_error() {
        let detector = AnomalyDetector::new(AnomalyConfig::default());
        let err = detector.detect(&[]).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.public_message(), "No features provided");
    }

    #[test]
    fn mismatched_arity_rejected() {
        let detector = AnomalyDetector::new(AnomalyConfig::default());
        let err = detector
            .detect(&[vec![0.1, 0.2], vec![0.1]])
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn flags_planted_outlier() {
        let detector = AnomalyDetector::new(AnomalyConfig::default());
        let mut batch: Vec<Vec<f64>> = (0..30)
            .map(|i| vec![0.01 * (i % 4) as f64, 0.01 * (i % 3) as f64])
            .collect();
        batch.push(vec![9.0, 9.0]);

        let report = detector.detect(&batch).unwrap();
        assert_eq!(report.total_samples, 31);
        assert!(report.results[30].is_anomaly);
        assert!(report.anomalies_detected >= 1);
    }

    #[test]
    fn repeat_calls_identical() {
        let detector = AnomalyDetector::new(AnomalyConfig::default());
        let batch: Vec<Vec<f64>> = (0..20)
            .map(|i| vec![i as f64, (i * i) as f64 / 10.0])
            .collect();

        let a = detector.detect(&batch).unwrap();
        let b = detector.detect(&batch).unwrap();
        for (x, y) in a.results.iter().zip(b.results.iter()) {
            assert_eq!(x.anomaly_score, y.anomaly_score);
            assert_eq!(x.is_anomaly, y.is_anomaly);
        }
    }
}
