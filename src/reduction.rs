//! SVD-based dimensionality reduction for visualization.
//!
//! Projects a set of equal-length vectors onto the `target_dims` axes of
//! maximum variance. The pipeline is: mandatory centering (subtract the
//! per-dimension mean, so the decomposition captures variance rather than
//! absolute position), singular value decomposition of the centered n×d
//! matrix with singular values in descending order, then projection of row i
//! onto the first `target_dims` columns of `U·Σ`.
//!
//! Determinism: the decomposition has no randomized initialization, and sign
//! ambiguity in the singular vectors is canonicalized per axis (the U-column
//! entry of largest magnitude is forced positive, lowest row index winning
//! ties), so repeated calls on identical input are bit-identical.
//!
//! Rank degeneracy: singular values at or below the numerical-rank tolerance
//! produce output coordinates of exactly 0.0 instead of arbitrary small
//! numbers. Reducing n identical vectors therefore yields all-zero output.

use log::{debug, info, trace};
use nalgebra::DMatrix;

use crate::error::{CoreError, CoreResult};

/// Maximum Golub-Kahan sweeps before the decomposition is declared failed.
const SVD_MAX_ITERATIONS: usize = 1000;

/// SVD reducer over plain vector sets.
///
/// Stateless; one instance can serve any number of calls.
pub struct SvdReducer;

impl SvdReducer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Reduce `vectors` (n rows of dimension d) to `target_dims` coordinates
    /// each, index-aligned with the input.
    ///
    /// # Errors
    /// - `InsufficientData` if `n == 0` or `d == 0`.
    /// - `InvalidVectorDimensions` for ragged input, or if
    ///   `target_dims` is 0 or exceeds `min(n, d)`.
    /// - `DimensionalityReduction` if the decomposition fails to converge.
    pub fn reduce(
        &self,
        vectors: &[Vec<f64>],
        target_dims: usize,
    ) -> CoreResult<Vec<Vec<f64>>> {
        let n = vectors.len();
        if n == 0 {
            return Err(CoreError::InsufficientData {
                required: 1,
                provided: 0,
            });
        }

        let d = vectors[0].len();
        if d == 0 {
            return Err(CoreError::InsufficientData {
                required: 1,
                provided: 0,
            });
        }
        for (i, vector) in vectors.iter().enumerate() {
            if vector.len() != d {
                return Err(CoreError::InvalidVectorDimensions {
                    expected: d,
                    got: vector.len(),
                    index: Some(i),
                });
            }
        }

        let max_rank = n.min(d);
        if target_dims == 0 || target_dims > max_rank {
            return Err(CoreError::InvalidVectorDimensions {
                expected: max_rank,
                got: target_dims,
                index: None,
            });
        }

        info!(
            "Reducing {} vectors from {} to {} dimensions",
            n, d, target_dims
        );

        // Mandatory centering: mean over all n rows, subtracted from each.
        let mut mean = vec![0.0; d];
        for vector in vectors {
            for (m, v) in mean.iter_mut().zip(vector) {
                *m += v;
            }
        }
        #[allow(clippy::cast_precision_loss)]
        for m in &mut mean {
            *m /= n as f64;
        }

        let centered = DMatrix::from_fn(n, d, |i, j| vectors[i][j] - mean[j]);

        let svd = centered
            .try_svd(true, false, f64::EPSILON, SVD_MAX_ITERATIONS)
            .ok_or_else(|| CoreError::DimensionalityReduction {
                method: "SVD".to_string(),
                reason: "decomposition did not converge".to_string(),
            })?;

        let u = svd.u.ok_or_else(|| CoreError::DimensionalityReduction {
            method: "SVD".to_string(),
            reason: "U factor was not computed".to_string(),
        })?;
        let sigma = &svd.singular_values;

        // Numerical-rank tolerance relative to the largest singular value.
        #[allow(clippy::cast_precision_loss)]
        let tolerance = sigma[0] * n.max(d) as f64 * f64::EPSILON;
        debug!(
            "sigma_max={:.6e}, rank tolerance={:.6e}",
            sigma[0], tolerance
        );

        // Per-axis sign canonicalization: force the largest-magnitude entry
        // of each retained U column positive, lowest row index on ties.
        let mut flip = vec![1.0; target_dims];
        for (j, f) in flip.iter_mut().enumerate() {
            let mut pivot = 0;
            for i in 1..n {
                if u[(i, j)].abs() > u[(pivot, j)].abs() {
                    pivot = i;
                }
            }
            if u[(pivot, j)] < 0.0 {
                *f = -1.0;
            }
            trace!("axis {}: pivot row {}, flip {}", j, pivot, f);
        }

        let reduced = (0..n)
            .map(|i| {
                (0..target_dims)
                    .map(|j| {
                        if sigma[j] <= tolerance {
                            0.0
                        } else {
                            u[(i, j)] * sigma[j] * flip[j]
                        }
                    })
                    .collect()
            })
            .collect();

        Ok(reduced)
    }
}

impl Default for SvdReducer {
    fn default() -> Self {
        Self::new()
    }
}
