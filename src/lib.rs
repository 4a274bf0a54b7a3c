//! Numerical core for vault graph visualization.
//!
//! Three pure computation stages turn a vault's link graph (or externally
//! supplied embeddings) into renderable data:
//!
//! 1. [`matrix`] — adjacency and Laplacian construction from node/edge data,
//!    flattened to one dense vector per node;
//! 2. [`reduction`] — SVD projection of arbitrary-dimensional vector sets
//!    down to (typically) three coordinates;
//! 3. [`ops`] / [`clustering`] — normalization, distance, and deterministic
//!    k-means for cluster coloring.
//!
//! All stages are stateless, synchronous and deterministic: every call
//! recomputes from its full input, holds no process-wide state, and is
//! re-entrant. The host talks to the crate exclusively through the JSON
//! [`boundary`] adapter; structured failures ([`CoreError`]) are reported
//! before any partial result exists.

pub mod boundary;
pub mod clustering;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod reduction;
pub mod source;

#[cfg(test)]
mod tests;

pub use clustering::{kmeans, KmeansConfig};
pub use error::{CoreError, CoreResult};
pub use matrix::{GraphEdge, GraphMatrixBuilder};
pub use ops::{euclidean_distance, normalize_all, normalize_vectors, squared_distance};
pub use reduction::SvdReducer;
pub use source::{plain_vectors, VectorOrigin, VectorRecord};
