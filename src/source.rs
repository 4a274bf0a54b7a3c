//! Vector-set origin tagging.
//!
//! The core components operate on plain vector sets and never need to know
//! where a vector came from; only the boundary adapter consumes these tags,
//! to keep graph-derived rows and external embeddings flowing through the
//! same pipeline.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Where a vector set came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VectorOrigin {
    /// Rows of the link-graph adjacency matrix.
    Adjacency,
    /// Rows of the link-graph Laplacian.
    Laplacian,
    /// Externally supplied embedding vectors.
    Embedding { source_id: String },
}

/// A single vector with its identifying information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VectorRecord {
    /// Note path or other unique id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// The vector itself.
    pub vector: Vec<f64>,
    /// Which source produced this vector.
    pub origin: VectorOrigin,
    /// Free-form extra fields (tags, dates).
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl VectorRecord {
    #[must_use]
    pub fn new(id: String, label: String, vector: Vec<f64>, origin: VectorOrigin) -> Self {
        Self {
            id,
            label,
            vector,
            origin,
            metadata: HashMap::new(),
        }
    }

    pub fn add_metadata(&mut self, key: String, value: String) {
        self.metadata.insert(key, value);
    }

    #[must_use]
    pub fn dimensionality(&self) -> usize {
        self.vector.len()
    }
}

/// Strip origin/metadata down to the plain vector set the core consumes.
#[must_use]
pub fn plain_vectors(records: &[VectorRecord]) -> Vec<Vec<f64>> {
    records.iter().map(|r| r.vector.clone()).collect()
}
