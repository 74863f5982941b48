//! Factor schemas: ordered field names with per-field defaults.
//!
//! Vectorization never fails on missing keys; the default fills the slot.
//! Order is significant and must line up with any weight table applied later.

use super::FeatureVector;
use crate::error::{EngineError, Result};
use std::collections::HashMap;

/// Neutral default for an unreported risk factor.
pub const NEUTRAL_DEFAULT: f64 = 0.5;

/// Canonical 8-factor risk schema order. `RiskWeights::as_vec` follows it.
pub const RISK_FACTOR_NAMES: [&str; 8] = [
    "user_behavior_score",
    "system_vulnerability_score",
    "network_threat_level",
    "data_sensitivity_score",
    "access_frequency",
    "geographical_risk",
    "time_based_risk",
    "device_trust_score",
];

/// Ordered list of (factor name, default value) pairs.
#[derive(Debug, Clone)]
pub struct FactorSchema {
    fields: Vec<(String, f64)>,
}

impl FactorSchema {
    /// A zero-length schema has no meaningful vectorization.
    pub fn new(fields: Vec<(String, f64)>) -> Result<Self> {
        if fields.is_empty() {
            return Err(EngineError::validation("Schema must declare at least one factor"));
        }
        Ok(Self { fields })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Map named factors into schema order, substituting the default for any
    /// absent key. Side-effect-free; extra keys in the input are ignored.
    pub fn vectorize(&self, factors: &HashMap<String, f64>) -> FeatureVector {
        let values = self
            .fields
            .iter()
            .map(|(name, default)| factors.get(name).copied().unwrap_or(*default))
            .collect();
        FeatureVector::new(values)
    }
}

/// The canonical risk schema: 8 factors, all defaulting to neutral 0.5.
pub fn risk_factor_schema() -> FactorSchema {
    let fields = RISK_FACTOR_NAMES
        .iter()
        .map(|name| (name.to_string(), NEUTRAL_DEFAULT))
        .collect();
    FactorSchema { fields }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_schema_rejected() {
        let err = FactorSchema::new(Vec::new()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn vectorize_fills_defaults_in_order() {
        let schema = risk_factor_schema();
        let mut factors = HashMap::new();
        factors.insert("network_threat_level".to_string(), 0.9);
        factors.insert("device_trust_score".to_string(), 0.1);

        let v = schema.vectorize(&factors);
        assert_eq!(v.dim, 8);
        assert_eq!(v.values[2], 0.9);
        assert_eq!(v.values[7], 0.1);
        // Unreported factors stay neutral
        assert_eq!(v.values[0], NEUTRAL_DEFAULT);
        assert_eq!(v.values[5], NEUTRAL_DEFAULT);
    }

    #[test]
    fn vectorize_ignores_unknown_keys() {
        let schema = risk_factor_schema();
        let mut factors = HashMap::new();
        factors.insert("not_a_factor".to_string(), 42.0);

        let v = schema.vectorize(&factors);
        assert!(v.values.iter().all(|&x| x == NEUTRAL_DEFAULT));
    }
}
