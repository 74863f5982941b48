//! Named risk/behavioral signals → fixed-order numeric vectors.

mod schema;

pub use schema::{risk_factor_schema, FactorSchema, NEUTRAL_DEFAULT, RISK_FACTOR_NAMES};

use serde::{Deserialize, Serialize};

/// Ordered numeric vector of fixed arity matching a declared schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub dim: usize,
    pub values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            dim: values.len(),
            values,
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.dim.min(self.values.len())]
    }

    pub fn len(&self) -> usize {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }
}
