//! Per-batch standardization: zero mean, unit variance per column.
//!
//! The scaler is refit on every batch, so scores downstream are batch-relative
//! rather than globally comparable. That is the specified behavior: the scorer
//! stays stateless per request.

use ndarray::{Array2, Axis};

pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Fit column means and population standard deviations.
    pub fn fit(data: &Array2<f64>) -> Self {
        let cols = data.ncols();
        let rows = data.nrows().max(1) as f64;
        let mut mean = vec![0.0; cols];
        let mut scale = vec![1.0; cols];

        for (j, column) in data.axis_iter(Axis(1)).enumerate() {
            let m = column.sum() / rows;
            let var = column.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / rows;
            let sd = var.sqrt();
            mean[j] = m;
            // Constant columns pass through unscaled
            scale[j] = if sd == 0.0 || !sd.is_finite() { 1.0 } else { sd };
        }

        Self { mean, scale }
    }

    pub fn transform(&self, data: &Array2<f64>) -> Array2<f64> {
        let mut out = data.clone();
        for mut row in out.axis_iter_mut(Axis(0)) {
            for (j, x) in row.iter_mut().enumerate() {
                *x = (*x - self.mean[j]) / self.scale[j];
            }
        }
        out
    }

    pub fn fit_transform(data: &Array2<f64>) -> Array2<f64> {
        Self::fit(data).transform(data)
    }
}
