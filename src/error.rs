//! Structured error types for the numerical core.
//!
//! Every failure carries the offending indices/sizes so the boundary adapter
//! can build an actionable message. Errors are detected before any partial
//! result is produced; the core never returns a partially-valid structure and
//! never retries internally.

use std::fmt;

/// Errors produced by the numerical core.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// An edge references a node outside `[0, n)`.
    InvalidLinkIndex { from: usize, to: usize, max: usize },
    /// A vector has the wrong width, or a requested output width is not
    /// achievable given the input shape. `index` is the offending vector's
    /// position when the violation is per-vector.
    InvalidVectorDimensions {
        expected: usize,
        got: usize,
        index: Option<usize>,
    },
    /// Fewer vectors/dimensions than the operation structurally requires.
    InsufficientData { required: usize, provided: usize },
    /// Degenerate input to normalization: the vector at `index` has
    /// (effectively) zero Euclidean norm.
    ZeroNormVector { index: usize },
    /// Internal numerical failure, e.g. the decomposition did not converge.
    /// Fatal for the call; nothing is returned.
    DimensionalityReduction { method: String, reason: String },
    /// Malformed serialized input or output at the boundary.
    Serialization { context: String, source: String },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidLinkIndex { from, to, max } => {
                write!(
                    f,
                    "link ({from} -> {to}) references a node outside [0, {max}]"
                )
            }
            CoreError::InvalidVectorDimensions {
                expected,
                got,
                index,
            } => match index {
                Some(i) => write!(
                    f,
                    "vector {i} has dimension {got}, expected {expected}"
                ),
                None => write!(
                    f,
                    "requested dimension {got} not achievable, expected at most {expected}"
                ),
            },
            CoreError::InsufficientData { required, provided } => {
                write!(f, "insufficient data: required {required}, provided {provided}")
            }
            CoreError::ZeroNormVector { index } => {
                write!(f, "vector {index} has zero norm and cannot be normalized")
            }
            CoreError::DimensionalityReduction { method, reason } => {
                write!(f, "{method} reduction failed: {reason}")
            }
            CoreError::Serialization { context, source } => {
                write!(f, "serialization error in {context}: {source}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

pub type CoreResult<T> = Result<T, CoreError>;
