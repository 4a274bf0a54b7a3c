//! Serialized call boundary.
//!
//! Each function accepts and returns JSON-encoded structured data; this is
//! the only surface the host sees. Malformed input (wrong shape, non-numeric
//! values) fails with a `Serialization` error before any computation begins.
//! All numeric values are 64-bit floats, all indices 0-based.

use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::clustering::{kmeans, KmeansConfig};
use crate::error::{CoreError, CoreResult};
use crate::matrix::{GraphEdge, GraphMatrixBuilder};
use crate::reduction::SvdReducer;
use crate::source::{plain_vectors, VectorRecord};

fn parse<T: DeserializeOwned>(json: &str, context: &str) -> CoreResult<T> {
    serde_json::from_str(json).map_err(|e| CoreError::Serialization {
        context: context.to_string(),
        source: e.to_string(),
    })
}

fn encode<T: Serialize>(value: &T, context: &str) -> CoreResult<String> {
    serde_json::to_string(value).map_err(|e| CoreError::Serialization {
        context: context.to_string(),
        source: e.to_string(),
    })
}

/// Build the adjacency matrix and return its dense rows, row i = node i's
/// outgoing link counts.
///
/// # Errors
/// `Serialization` for malformed input; `InvalidLinkIndex` for out-of-range
/// edges.
pub fn build_adjacency(node_keys_json: &str, edges_json: &str) -> CoreResult<String> {
    let node_keys: Vec<String> = parse(node_keys_json, "build_adjacency.nodes")?;
    let edges: Vec<GraphEdge> = parse(edges_json, "build_adjacency.edges")?;

    info!(
        "boundary: build_adjacency ({} nodes, {} edges)",
        node_keys.len(),
        edges.len()
    );
    let builder = GraphMatrixBuilder::new(node_keys);
    let matrix = builder.build_adjacency(&edges)?;
    encode(&builder.to_dense_rows(&matrix), "build_adjacency.rows")
}

/// Build the Laplacian matrix and return its dense rows (values may be
/// negative).
///
/// # Errors
/// `Serialization` for malformed input; `InvalidLinkIndex` for out-of-range
/// edges.
pub fn build_laplacian(node_keys_json: &str, edges_json: &str) -> CoreResult<String> {
    let node_keys: Vec<String> = parse(node_keys_json, "build_laplacian.nodes")?;
    let edges: Vec<GraphEdge> = parse(edges_json, "build_laplacian.edges")?;

    info!(
        "boundary: build_laplacian ({} nodes, {} edges)",
        node_keys.len(),
        edges.len()
    );
    let builder = GraphMatrixBuilder::new(node_keys);
    let matrix = builder.build_laplacian(&edges)?;
    encode(&builder.to_dense_rows(&matrix), "build_laplacian.rows")
}

/// Reduce equal-length vectors to `target_dims` coordinates, index-aligned.
///
/// # Errors
/// `Serialization` for malformed input; dimension/rank violations from the
/// reducer.
pub fn reduce_dimensions(vectors_json: &str, target_dims: usize) -> CoreResult<String> {
    let vectors: Vec<Vec<f64>> = parse(vectors_json, "reduce_dimensions.vectors")?;

    info!(
        "boundary: reduce_dimensions ({} vectors -> {} dims)",
        vectors.len(),
        target_dims
    );
    let reduced = SvdReducer::new().reduce(&vectors, target_dims)?;
    encode(&reduced, "reduce_dimensions.result")
}

/// Cluster vectors; returns one cluster index per vector, index-aligned.
///
/// # Errors
/// `Serialization` for malformed input; `InsufficientData` from the
/// clusterer.
pub fn cluster_vectors(vectors_json: &str, num_clusters: usize) -> CoreResult<String> {
    let vectors: Vec<Vec<f64>> = parse(vectors_json, "cluster_vectors.vectors")?;

    info!(
        "boundary: cluster_vectors ({} vectors, k={})",
        vectors.len(),
        num_clusters
    );
    let assignments = kmeans(&vectors, num_clusters, &KmeansConfig::default())?;
    encode(&assignments, "cluster_vectors.result")
}

/// A reduced point ready for the renderer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReducedPoint {
    pub id: String,
    pub label: String,
    pub position: Vec<f64>,
}

/// Record-aware projection: reduce tagged [`VectorRecord`]s and return
/// `{id, label, position}` points, id-aligned with the input order.
///
/// # Errors
/// `Serialization` for malformed input; dimension/rank violations from the
/// reducer.
pub fn reduce_records(records_json: &str, target_dims: usize) -> CoreResult<String> {
    let records: Vec<VectorRecord> = parse(records_json, "reduce_records.records")?;

    info!(
        "boundary: reduce_records ({} records -> {} dims)",
        records.len(),
        target_dims
    );
    let reduced = SvdReducer::new().reduce(&plain_vectors(&records), target_dims)?;

    let points: Vec<ReducedPoint> = records
        .iter()
        .zip(reduced)
        .map(|(record, position)| ReducedPoint {
            id: record.id.clone(),
            label: record.label.clone(),
            position,
        })
        .collect();
    encode(&points, "reduce_records.result")
}
