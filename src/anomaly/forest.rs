//! Ensemble of random partition trees (isolation-style outlier detection).
//!
//! Each tree recursively splits the feature space with random axis-aligned
//! cuts; samples isolated in few splits get short path lengths and therefore
//! low (more anomalous) scores. Fully deterministic under a fixed seed.

use crate::config::AnomalyConfig;
use ndarray::{Array2, ArrayView2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Average path length of an unsuccessful binary search over `n` points.
/// Normalizes raw isolation depth so scores are comparable across tree sizes.
fn average_path_length(n: usize) -> f64 {
    match n {
        0 | 1 => 0.0,
        2 => 1.0,
        _ => {
            let n = n as f64;
            2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
        }
    }
}

enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
    Leaf {
        size: usize,
    },
}

pub struct IsolationForest {
    trees: Vec<Node>,
    subsample: usize,
    offset: f64,
}

impl IsolationForest {
    /// Fit the ensemble on a scaled batch and set the contamination offset
    /// from the batch's own score distribution.
    pub fn fit(data: &Array2<f64>, config: &AnomalyConfig) -> Self {
        let n = data.nrows();
        let subsample = config.max_samples.min(n).max(1);
        let max_depth = (subsample as f64).log2().ceil().max(0.0) as usize;
        let mut rng = StdRng::seed_from_u64(config.seed);

        let mut trees = Vec::with_capacity(config.trees);
        for _ in 0..config.trees {
            let indices = sample_without_replacement(n, subsample, &mut rng);
            trees.push(build_tree(data.view(), &indices, 0, max_depth, &mut rng));
        }

        let mut forest = Self {
            trees,
            subsample,
            offset: 0.0,
        };
        let scores = forest.score_samples(data);
        forest.offset = percentile(&scores, config.contamination * 100.0);
        forest
    }

    /// Raw scores: `-2^(-E[h(x)] / c(subsample))`, in (-1, 0]. Lower means
    /// stronger outlier evidence.
    pub fn score_samples(&self, data: &Array2<f64>) -> Vec<f64> {
        let denom = average_path_length(self.subsample);
        data.rows()
            .into_iter()
            .map(|row| {
                let total: f64 = self
                    .trees
                    .iter()
                    .map(|tree| path_length(tree, row.as_slice().unwrap_or(&[])))
                    .sum();
                let avg = total / self.trees.len().max(1) as f64;
                if denom == 0.0 {
                    -1.0
                } else {
                    -(2f64.powf(-avg / denom))
                }
            })
            .collect()
    }

    /// Scores shifted by the contamination offset; strictly negative values
    /// are classified as outliers.
    pub fn decision_function(&self, data: &Array2<f64>) -> Vec<f64> {
        self.score_samples(data)
            .into_iter()
            .map(|s| s - self.offset)
            .collect()
    }
}

fn sample_without_replacement(n: usize, k: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    for i in 0..k.min(n) {
        let j = rng.gen_range(i..n);
        indices.swap(i, j);
    }
    indices.truncate(k);
    indices
}

fn build_tree(
    data: ArrayView2<'_, f64>,
    indices: &[usize],
    depth: usize,
    max_depth: usize,
    rng: &mut StdRng,
) -> Node {
    if indices.len() <= 1 || depth >= max_depth {
        return Node::Leaf {
            size: indices.len(),
        };
    }

    // Only features with spread in this subset can be split
    let candidates: Vec<(usize, f64, f64)> = (0..data.ncols())
        .filter_map(|f| {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for &i in indices {
                let v = data[[i, f]];
                min = min.min(v);
                max = max.max(v);
            }
            (min < max).then_some((f, min, max))
        })
        .collect();

    if candidates.is_empty() {
        return Node::Leaf {
            size: indices.len(),
        };
    }
    let (feature, min, max) = candidates[rng.gen_range(0..candidates.len())];

    let threshold = min + rng.gen::<f64>() * (max - min);
    let (left, right): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&i| data[[i, feature]] < threshold);

    if left.is_empty() || right.is_empty() {
        return Node::Leaf {
            size: indices.len(),
        };
    }

    Node::Split {
        feature,
        threshold,
        left: Box::new(build_tree(data, &left, depth + 1, max_depth, rng)),
        right: Box::new(build_tree(data, &right, depth + 1, max_depth, rng)),
    }
}

fn path_length(node: &Node, sample: &[f64]) -> f64 {
    let mut depth = 0.0;
    let mut current = node;
    loop {
        match current {
            Node::Leaf { size } => return depth + average_path_length(*size),
            Node::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                current = if sample.get(*feature).copied().unwrap_or(0.0) < *threshold {
                    left
                } else {
                    right
                };
                depth += 1.0;
            }
        }
    }
}

/// Linearly interpolated percentile, `pct` in [0, 100].
fn percentile(values: &[f64], pct: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let rank = (pct / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn clustered_batch() -> Array2<f64> {
        // 24 points near the origin plus one far outlier
        let mut rows: Vec<f64> = Vec::new();
        for i in 0..24 {
            rows.push(0.01 * (i % 5) as f64);
            rows.push(0.01 * (i % 7) as f64);
        }
        rows.push(8.0);
        rows.push(8.0);
        Array2::from_shape_vec((25, 2), rows).unwrap()
    }

    #[test]
    fn average_path_length_known_values() {
        assert_eq!(average_path_length(0), 0.0);
        assert_eq!(average_path_length(1), 0.0);
        assert_eq!(average_path_length(2), 1.0);
        assert!(average_path_length(256) > average_path_length(16));
    }

    #[test]
    fn outlier_scores_lowest() {
        let data = clustered_batch();
        let forest = IsolationForest::fit(&data, &AnomalyConfig::default());
        let scores = forest.score_samples(&data);

        let min_index = scores
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(min_index, 24);
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let data = clustered_batch();
        let config = AnomalyConfig::default();
        let a = IsolationForest::fit(&data, &config).decision_function(&data);
        let b = IsolationForest::fit(&data, &config).decision_function(&data);
        assert_eq!(a, b);
    }

    #[test]
    fn single_sample_is_not_an_outlier() {
        let data = Array2::from_shape_vec((1, 3), vec![0.0, 0.0, 0.0]).unwrap();
        let forest = IsolationForest::fit(&data, &AnomalyConfig::default());
        let decision = forest.decision_function(&data);
        // Offset equals the only score, so the decision function is exactly 0
        assert_eq!(decision, vec![0.0]);
    }

    #[test]
    fn percentile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&values, 0.0), 1.0);
        assert_eq!(percentile(&values, 100.0), 5.0);
        assert_eq!(percentile(&values, 50.0), 3.0);
        assert!((percentile(&values, 10.0) - 1.4).abs() < 1e-12);
    }
}
