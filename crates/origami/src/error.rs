//! Error type shared by the fold and layer operations.
//!
//! A cycle in the layer constraints is an expected, recoverable outcome (a
//! caller may retry with a smaller constraint set), while degenerate geometry
//! means the input data is broken. The two are kept apart so callers can
//! react differently.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrigamiError {
    /// The face-order constraints contain a cycle; no stacking satisfies them.
    /// `cluster` names the offending cluster when the query was cluster-aware.
    #[error("face orders are cyclic{}", cluster.map(|c| format!(" (cluster {c})")).unwrap_or_default())]
    CyclicConstraints { cluster: Option<usize> },
    /// A coordinate could not be recovered (missing or collinear anchors,
    /// zero-length line direction).
    #[error("degenerate geometry at vertex {vertex:?}: {reason}")]
    DegenerateGeometry {
        vertex: Option<usize>,
        reason: &'static str,
    },
    /// Malformed graph input (index out of range, bad sign, wrong dimension).
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
}

impl OrigamiError {
    #[inline]
    pub fn is_cyclic(&self) -> bool {
        matches!(self, OrigamiError::CyclicConstraints { .. })
    }
}

pub type Result<T> = std::result::Result<T, OrigamiError>;
