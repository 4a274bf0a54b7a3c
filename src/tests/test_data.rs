//! Shared fixtures for the test suite.
//!
//! Everything here is deterministic: blob jitter comes from a fixed linear
//! congruential sequence, never from a random source, so assertions on
//! cluster assignments stay stable run to run.

use crate::matrix::GraphEdge;

/// The worked 3-note example: 0 -> 1, 0 -> 2, 1 -> 2.
pub fn three_note_graph() -> (Vec<String>, Vec<GraphEdge>) {
    let keys = vec![
        "note1.md".to_string(),
        "note2.md".to_string(),
        "note3.md".to_string(),
    ];
    let edges = vec![
        GraphEdge { from: 0, to: 1 },
        GraphEdge { from: 0, to: 2 },
        GraphEdge { from: 1, to: 2 },
    ];
    (keys, edges)
}

/// Deterministic pseudo-uniform value in [-1, 1) from an LCG state.
fn jitter(state: &mut u64) -> f64 {
    *state = state
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    #[allow(clippy::cast_precision_loss)]
    let unit = (*state >> 11) as f64 / (1u64 << 53) as f64;
    2.0 * unit - 1.0
}

/// Points scattered around well-separated 2-D centers.
pub fn make_blobs(centers: &[[f64; 2]], per_cluster: usize, spread: f64) -> Vec<Vec<f64>> {
    let mut state = 128u64;
    let mut rows = Vec::with_capacity(centers.len() * per_cluster);
    for center in centers {
        for _ in 0..per_cluster {
            rows.push(vec![
                center[0] + spread * jitter(&mut state),
                center[1] + spread * jitter(&mut state),
            ]);
        }
    }
    rows
}
