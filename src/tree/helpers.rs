//! Helper functions for regression tree building.
//!
//! Internal split search and partitioning used by the decision tree and
//! the random forest.

use super::{RegressionLeaf, RegressionTreeNode};
use crate::primitives::Matrix;

/// Population variance of a slice of values.
pub(super) fn variance_f32(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f32;
    let mean = values.iter().sum::<f32>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n
}

/// Builds a leaf predicting the mean of the targets that reached it.
pub(super) fn make_regression_leaf(y: &[f32], n_samples: usize) -> RegressionTreeNode {
    let value = if y.is_empty() {
        0.0
    } else {
        y.iter().sum::<f32>() / y.len() as f32
    };
    RegressionTreeNode::Leaf(RegressionLeaf { value, n_samples })
}

/// Whether the depth limit has been reached.
pub(super) fn at_max_depth(depth: usize, max_depth: Option<usize>) -> bool {
    max_depth.is_some_and(|max_d| depth >= max_d)
}

/// Get sorted unique values from feature data.
pub(super) fn get_sorted_unique_values(x: &[f32]) -> Vec<f32> {
    let mut sorted_indices: Vec<usize> = (0..x.len()).collect();
    sorted_indices.sort_by(|&a, &b| {
        x[a].partial_cmp(&x[b])
            .expect("f32 values should be comparable")
    });

    let mut unique_values = Vec::new();
    let mut prev_val = x[sorted_indices[0]];
    unique_values.push(prev_val);

    for &idx in sorted_indices.get(1..).unwrap_or(&[]) {
        if (x[idx] - prev_val).abs() > 1e-10 {
            unique_values.push(x[idx]);
            prev_val = x[idx];
        }
    }

    unique_values
}

/// Weighted child variance for a candidate split of one feature column.
///
/// Returns `None` when the threshold puts all samples on one side.
fn weighted_split_variance(x: &[f32], y: &[f32], threshold: f32) -> Option<f32> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for (idx, &val) in x.iter().enumerate() {
        if val <= threshold {
            left.push(y[idx]);
        } else {
            right.push(y[idx]);
        }
    }

    if left.is_empty() || right.is_empty() {
        return None;
    }

    let n = y.len() as f32;
    let weight_left = left.len() as f32 / n;
    let weight_right = right.len() as f32 / n;

    Some(weight_left * variance_f32(&left) + weight_right * variance_f32(&right))
}

/// Finds the best split for a single feature column.
///
/// Returns (threshold, variance reduction) for the best midpoint threshold,
/// or `None` if no split reduces variance.
fn find_best_regression_split_for_feature(x: &[f32], y: &[f32]) -> Option<(f32, f32)> {
    if x.len() < 2 {
        return None;
    }

    let unique_values = get_sorted_unique_values(x);
    if unique_values.len() < 2 {
        return None;
    }

    let parent_variance = variance_f32(y);
    let mut best_gain = 0.0;
    let mut best_threshold = 0.0;

    // Try each midpoint as threshold
    for i in 0..unique_values.len() - 1 {
        let threshold = (unique_values[i] + unique_values[i + 1]) / 2.0;

        if let Some(split_variance) = weighted_split_variance(x, y, threshold) {
            let gain = parent_variance - split_variance;
            if gain > best_gain {
                best_gain = gain;
                best_threshold = threshold;
            }
        }
    }

    if best_gain > 0.0 {
        Some((best_threshold, best_gain))
    } else {
        None
    }
}

/// Finds the best split across all features.
///
/// Returns (feature index, threshold, variance reduction).
pub(super) fn find_best_regression_split(
    x_matrix: &Matrix<f32>,
    y: &[f32],
) -> Option<(usize, f32, f32)> {
    let (n_samples, n_features) = x_matrix.shape();

    if n_samples < 2 {
        return None;
    }

    let mut best_gain = 0.0;
    let mut best_feature = 0;
    let mut best_threshold = 0.0;

    for feature_idx in 0..n_features {
        let mut feature_values = Vec::with_capacity(n_samples);
        for row in 0..n_samples {
            feature_values.push(x_matrix.get(row, feature_idx));
        }

        if let Some((threshold, gain)) =
            find_best_regression_split_for_feature(&feature_values, y)
        {
            if gain > best_gain {
                best_gain = gain;
                best_feature = feature_idx;
                best_threshold = threshold;
            }
        }
    }

    if best_gain > 0.0 {
        Some((best_feature, best_threshold, best_gain))
    } else {
        None
    }
}

/// Partitions sample indices by a feature threshold.
pub(super) fn partition_by_threshold(
    x: &Matrix<f32>,
    n_samples: usize,
    feature_idx: usize,
    threshold: f32,
) -> (Vec<usize>, Vec<usize>) {
    let mut left_indices = Vec::new();
    let mut right_indices = Vec::new();

    for row in 0..n_samples {
        if x.get(row, feature_idx) <= threshold {
            left_indices.push(row);
        } else {
            right_indices.push(row);
        }
    }

    (left_indices, right_indices)
}

/// Extracts the sub-matrix and targets for the given sample indices.
pub(super) fn split_regression_data_by_indices(
    x: &Matrix<f32>,
    y: &[f32],
    indices: &[usize],
) -> (Matrix<f32>, Vec<f32>) {
    let n_cols = x.shape().1;
    let mut data = Vec::with_capacity(indices.len() * n_cols);
    let mut targets = Vec::with_capacity(indices.len());

    for &idx in indices {
        for col in 0..n_cols {
            data.push(x.get(idx, col));
        }
        targets.push(y[idx]);
    }

    let matrix = Matrix::from_vec(indices.len(), n_cols, data)
        .expect("matrix creation should succeed with valid indices");
    (matrix, targets)
}

/// Creates a bootstrap sample (random sample with replacement).
///
/// Returns indices of samples to include in the bootstrap sample.
pub(super) fn bootstrap_sample(n_samples: usize, random_state: Option<u64>) -> Vec<usize> {
    use rand::distributions::{Distribution, Uniform};
    use rand::SeedableRng;

    let dist = Uniform::from(0..n_samples);

    let mut indices = Vec::with_capacity(n_samples);

    if let Some(seed) = random_state {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        for _ in 0..n_samples {
            indices.push(dist.sample(&mut rng));
        }
    } else {
        let mut rng = rand::thread_rng();
        for _ in 0..n_samples {
            indices.push(dist.sample(&mut rng));
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variance_constant_is_zero() {
        assert!(variance_f32(&[5.0, 5.0, 5.0]) < 1e-10);
    }

    #[test]
    fn test_variance_known_value() {
        // Values 2 and 4: mean 3, population variance 1.
        assert!((variance_f32(&[2.0, 4.0]) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sorted_unique_values() {
        let unique = get_sorted_unique_values(&[3.0, 1.0, 3.0, 2.0]);
        assert_eq!(unique, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_best_split_for_feature_separates_groups() {
        let x = [1.0, 2.0, 10.0, 11.0];
        let y = [5.0, 5.0, 50.0, 50.0];
        let (threshold, gain) =
            find_best_regression_split_for_feature(&x, &y).expect("a split exists");
        assert!(threshold > 2.0 && threshold < 10.0);
        assert!(gain > 0.0);
    }

    #[test]
    fn test_best_split_none_for_constant_feature() {
        let x = [1.0, 1.0, 1.0];
        let y = [5.0, 10.0, 15.0];
        assert!(find_best_regression_split_for_feature(&x, &y).is_none());
    }

    #[test]
    fn test_bootstrap_sample_size_and_range() {
        let indices = bootstrap_sample(10, Some(7));
        assert_eq!(indices.len(), 10);
        assert!(indices.iter().all(|&i| i < 10));
    }

    #[test]
    fn test_bootstrap_sample_seeded_is_deterministic() {
        let a = bootstrap_sample(20, Some(42));
        let b = bootstrap_sample(20, Some(42));
        assert_eq!(a, b);
    }
}
