//! Deterministic k-means clustering.
//!
//! Downstream rendering colors nodes by cluster index, so the whole contract
//! here is reproducibility: identical input always yields identical final
//! assignments, bit-for-bit.
//!
//! - Initial centroid `c` is the input vector at index `⌊c·n/k⌋`; seeding is
//!   derived from input order, never from a random source.
//! - Assignment uses squared Euclidean distance with ties broken toward the
//!   lower cluster index.
//! - An empty cluster is re-seeded with the vector currently farthest from
//!   its own centroid, so no cluster is ever silently dropped.
//! - Iteration stops when no assignment changes, or at the configured
//!   maximum (a termination bound for pathological inputs, not the expected
//!   stopping path).
//!
//! Output cluster indices carry no semantic ordering; only stability and
//! determinism are contracted.

use log::{debug, info, trace, warn};

use crate::error::{CoreError, CoreResult};
use crate::ops::squared_distance;

/// Tuning knobs for [`kmeans`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmeansConfig {
    /// Hard iteration cap guaranteeing termination.
    pub max_iterations: usize,
}

impl Default for KmeansConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
        }
    }
}

/// Partition `vectors` into `k` clusters; returns one cluster index per
/// vector, index-aligned with the input.
///
/// # Errors
/// - `InsufficientData` unless `1 <= k <= n`.
/// - `InvalidVectorDimensions` for ragged input.
pub fn kmeans(
    vectors: &[Vec<f64>],
    k: usize,
    config: &KmeansConfig,
) -> CoreResult<Vec<usize>> {
    let n = vectors.len();
    if n == 0 || k == 0 || k > n {
        return Err(CoreError::InsufficientData {
            required: k.max(1),
            provided: n,
        });
    }

    let dim = vectors[0].len();
    for (i, vector) in vectors.iter().enumerate() {
        if vector.len() != dim {
            return Err(CoreError::InvalidVectorDimensions {
                expected: dim,
                got: vector.len(),
                index: Some(i),
            });
        }
    }

    info!("k-means: {} vectors, {} clusters, dim {}", n, k, dim);

    // Index-derived seeding: centroid c starts at the vector floor(c*n/k).
    let mut centroids: Vec<Vec<f64>> = (0..k).map(|c| vectors[c * n / k].clone()).collect();
    let mut assignments = vec![0usize; n];
    let mut first_pass = true;

    for iteration in 0..config.max_iterations {
        let mut changed = false;

        // Assignment step. Strict < keeps the lower cluster index on ties.
        for (i, vector) in vectors.iter().enumerate() {
            let mut best_cluster = 0;
            let mut best_dist = f64::INFINITY;
            for (c, centroid) in centroids.iter().enumerate() {
                let dist = squared_distance(vector, centroid)?;
                if dist < best_dist {
                    best_dist = dist;
                    best_cluster = c;
                }
            }
            if first_pass || assignments[i] != best_cluster {
                assignments[i] = best_cluster;
                changed = true;
            }
        }
        first_pass = false;

        // Re-seed empty clusters before recomputing centroids.
        let mut sizes = vec![0usize; k];
        for &c in &assignments {
            sizes[c] += 1;
        }
        for empty in 0..k {
            if sizes[empty] > 0 {
                continue;
            }
            let donor = farthest_from_own_centroid(vectors, &assignments, &centroids, &sizes)?;
            if let Some(donor) = donor {
                warn!(
                    "iteration {}: cluster {} empty, re-seeding with vector {}",
                    iteration, empty, donor
                );
                sizes[assignments[donor]] -= 1;
                assignments[donor] = empty;
                sizes[empty] = 1;
                changed = true;
            }
        }

        if !changed {
            debug!("k-means converged after {} iterations", iteration);
            break;
        }

        // Update step: centroid = mean of its members.
        #[allow(clippy::cast_precision_loss)]
        {
            let mut sums = vec![vec![0.0; dim]; k];
            for (vector, &c) in vectors.iter().zip(&assignments) {
                for (s, v) in sums[c].iter_mut().zip(vector) {
                    *s += v;
                }
            }
            for (c, sum) in sums.into_iter().enumerate() {
                if sizes[c] > 0 {
                    centroids[c] = sum.into_iter().map(|s| s / sizes[c] as f64).collect();
                }
            }
        }
        trace!("iteration {} complete", iteration);
    }

    Ok(assignments)
}

/// The vector farthest from the centroid of its own cluster, considering
/// only donors whose cluster keeps at least one member. Lowest index wins
/// ties (strict > scan order).
fn farthest_from_own_centroid(
    vectors: &[Vec<f64>],
    assignments: &[usize],
    centroids: &[Vec<f64>],
    sizes: &[usize],
) -> CoreResult<Option<usize>> {
    let mut best: Option<usize> = None;
    let mut best_dist = f64::NEG_INFINITY;
    for (i, vector) in vectors.iter().enumerate() {
        let c = assignments[i];
        if sizes[c] < 2 {
            continue;
        }
        let dist = squared_distance(vector, &centroids[c])?;
        if dist > best_dist {
            best_dist = dist;
            best = Some(i);
        }
    }
    Ok(best)
}
