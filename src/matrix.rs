//! Adjacency and Laplacian matrix construction from a link graph.
//!
//! The builder turns an ordered node list plus a directed edge multiset into
//! a sparse count matrix where `M[i][j]` is the number of edges from node i
//! to node j. Duplicate edges accumulate (count semantics) and self-edges are
//! permitted. The Laplacian is `L = D - A` with the out-degree diagonal, so
//! every Laplacian row sums to exactly zero.
//!
//! Construction is O(E) and stores only non-zero cells; `to_dense_rows`
//! deliberately materializes the O(n²) dense representation for downstream
//! reduction. Typical link graphs are <1% filled, which keeps the sparse
//! stage cheap even though the materialized output is dense. Callers that
//! need true sparsity must stay on the `CsMat` representation.

use std::collections::HashMap;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use sprs::{CsMat, TriMat};

use crate::error::{CoreError, CoreResult};

/// A directed link between two nodes, by dense index.
///
/// Wire names follow the host's JSON contract (`fromId`/`toId`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphEdge {
    /// Source node index.
    #[serde(rename = "fromId")]
    pub from: usize,
    /// Target node index.
    #[serde(rename = "toId")]
    pub to: usize,
}

/// Builds sparse adjacency and Laplacian matrices from directed edges.
///
/// Indices `0..n` are assigned by first-seen order of the supplied node key
/// list and are only valid for the lifetime of one builder.
pub struct GraphMatrixBuilder {
    num_nodes: usize,
    node_index: HashMap<String, usize>,
}

impl GraphMatrixBuilder {
    /// Create a builder over an ordered list of node keys.
    #[must_use]
    pub fn new(node_keys: Vec<String>) -> Self {
        let num_nodes = node_keys.len();
        debug!("GraphMatrixBuilder over {} nodes", num_nodes);
        let node_index = node_keys
            .into_iter()
            .enumerate()
            .map(|(i, key)| (key, i))
            .collect();

        Self {
            num_nodes,
            node_index,
        }
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub const fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Dense index of a node key, if present.
    #[must_use]
    pub fn node_index(&self, key: &str) -> Option<usize> {
        self.node_index.get(key).copied()
    }

    /// Build the sparse adjacency count matrix in CSR format.
    ///
    /// Every edge is validated before any accumulation: an out-of-range
    /// index fails the whole build with `InvalidLinkIndex` and no matrix is
    /// produced.
    ///
    /// # Errors
    /// `InvalidLinkIndex` if any edge references a node outside `[0, n)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn build_adjacency(&self, edges: &[GraphEdge]) -> CoreResult<CsMat<f64>> {
        info!(
            "Building adjacency matrix: {} nodes, {} edges",
            self.num_nodes,
            edges.len()
        );

        // Validation pass first so a bad edge leaves no partial state behind.
        for edge in edges {
            if edge.from >= self.num_nodes || edge.to >= self.num_nodes {
                return Err(CoreError::InvalidLinkIndex {
                    from: edge.from,
                    to: edge.to,
                    max: self.num_nodes.saturating_sub(1),
                });
            }
        }

        let mut counts: HashMap<(usize, usize), usize> = HashMap::new();
        for edge in edges {
            *counts.entry((edge.from, edge.to)).or_insert(0) += 1;
        }

        let mut triplets = TriMat::new((self.num_nodes, self.num_nodes));
        for ((from, to), count) in counts {
            trace!("cell ({}, {}) = {}", from, to, count);
            triplets.add_triplet(from, to, count as f64);
        }

        debug!("Adjacency built: {} non-zero cells", triplets.nnz());
        Ok(triplets.to_csr())
    }

    /// Build the graph Laplacian `L = D - A` in CSR format.
    ///
    /// `D` is the diagonal out-degree matrix (`D[i][i]` = row sum of `A`),
    /// so rows of `L` sum to zero. The adjacency is validated by
    /// construction; no further validation happens here.
    ///
    /// # Errors
    /// `InvalidLinkIndex` if any edge references a node outside `[0, n)`.
    pub fn build_laplacian(&self, edges: &[GraphEdge]) -> CoreResult<CsMat<f64>> {
        let adjacency = self.build_adjacency(edges)?;
        Ok(self.laplacian_of(&adjacency))
    }

    /// Pure Laplacian of an already-built adjacency matrix.
    #[must_use]
    pub fn laplacian_of(&self, adjacency: &CsMat<f64>) -> CsMat<f64> {
        info!("Building Laplacian from adjacency ({} nodes)", self.num_nodes);

        let mut degree = TriMat::new((self.num_nodes, self.num_nodes));
        for i in 0..self.num_nodes {
            let out_degree: f64 = adjacency
                .outer_view(i)
                .map_or(0.0, |row| row.iter().map(|(_, &v)| v).sum());
            if out_degree > 0.0 {
                degree.add_triplet(i, i, out_degree);
            }
        }

        let degree = degree.to_csr();
        let laplacian = &degree - adjacency;
        debug!("Laplacian built: {} non-zero cells", laplacian.nnz());
        laplacian
    }

    /// Flatten a matrix into one dense length-n vector per node.
    ///
    /// Entry `j` of row `i` is the sparse cell value or 0. This materializes
    /// the full n×n representation; see the module docs for the trade-off.
    #[must_use]
    pub fn to_dense_rows(&self, matrix: &CsMat<f64>) -> Vec<Vec<f64>> {
        (0..self.num_nodes)
            .map(|i| {
                let mut row = vec![0.0; self.num_nodes];
                if let Some(sparse_row) = matrix.outer_view(i) {
                    for (j, &value) in sparse_row.iter() {
                        row[j] = value;
                    }
                }
                row
            })
            .collect()
    }
}
