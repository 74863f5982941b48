//! Scoring benchmarks: factor aggregation and batch anomaly detection.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;
use verdict_engine::anomaly::AnomalyDetector;
use verdict_engine::config::{AnomalyConfig, RiskConfig};
use verdict_engine::risk::RiskEngine;

fn make_factors() -> HashMap<String, f64> {
    [
        ("user_behavior_score", 0.6),
        ("system_vulnerability_score", 0.8),
        ("network_threat_level", 0.4),
        ("data_sensitivity_score", 0.7),
        ("access_frequency", 0.3),
        ("geographical_risk", 0.5),
        ("time_based_risk", 0.2),
        ("device_trust_score", 0.9),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), *v))
    .collect()
}

fn make_batch(rows: usize, cols: usize) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|i| {
            (0..cols)
                .map(|j| ((i * 31 + j * 17) % 100) as f64 / 100.0)
                .collect()
        })
        .collect()
}

fn bench_risk_assessment(c: &mut Criterion) {
    let engine = RiskEngine::new(RiskConfig::default());
    let factors = make_factors();

    c.bench_function("risk_assess_8_factors", |b| {
        b.iter(|| black_box(engine.assess(black_box(&factors))))
    });
}

fn bench_anomaly_detection(c: &mut Criterion) {
    let detector = AnomalyDetector::new(AnomalyConfig::default());
    let batch = make_batch(64, 8);

    c.bench_function("anomaly_detect_64x8", |b| {
        b.iter(|| black_box(detector.detect(black_box(&batch))))
    });
}

criterion_group!(benches, bench_risk_assessment, bench_anomaly_detection);
criterion_main!(benches);
