//! Vector utilities: normalization and distance.
//!
//! These operate on arbitrary vector sets regardless of origin (graph rows or
//! external embeddings).

use log::debug;

use crate::error::{CoreError, CoreResult};

/// Norms below this are treated as zero.
pub const ZERO_NORM_EPSILON: f64 = 1e-10;

/// Normalize each vector to unit Euclidean length, per-item.
///
/// A vector whose norm is below [`ZERO_NORM_EPSILON`] fails that single item
/// with `ZeroNormVector { index }` instead of silently producing a zero or
/// NaN vector; callers decide whether to abort the batch or skip the item.
#[must_use]
pub fn normalize_vectors(vectors: &[Vec<f64>]) -> Vec<CoreResult<Vec<f64>>> {
    vectors
        .iter()
        .enumerate()
        .map(|(index, vector)| {
            let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
            if norm < ZERO_NORM_EPSILON {
                return Err(CoreError::ZeroNormVector { index });
            }
            Ok(vector.iter().map(|x| x / norm).collect())
        })
        .collect()
}

/// Strict batch normalization: the first degenerate vector aborts the call.
///
/// # Errors
/// `ZeroNormVector` with the index of the first offending vector.
pub fn normalize_all(vectors: &[Vec<f64>]) -> CoreResult<Vec<Vec<f64>>> {
    debug!("Normalizing {} vectors (strict)", vectors.len());
    normalize_vectors(vectors).into_iter().collect()
}

/// Euclidean distance between two vectors of equal dimension.
///
/// # Errors
/// `InvalidVectorDimensions` if the lengths differ.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> CoreResult<f64> {
    Ok(squared_distance(a, b)?.sqrt())
}

/// Squared Euclidean distance; the cheaper form used for nearest-centroid
/// comparisons.
///
/// # Errors
/// `InvalidVectorDimensions` if the lengths differ.
pub fn squared_distance(a: &[f64], b: &[f64]) -> CoreResult<f64> {
    if a.len() != b.len() {
        return Err(CoreError::InvalidVectorDimensions {
            expected: a.len(),
            got: b.len(),
            index: None,
        });
    }

    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>())
}
