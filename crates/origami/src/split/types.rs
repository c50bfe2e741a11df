//! Provenance and index maps produced by a split.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// How a new vertex came to be.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexSource {
    /// Interpolated at parameter `b` along the parent edge `vertices[0] → vertices[1]`.
    Edge { b: f64, vertices: [usize; 2] },
    /// Placed at `point` inside `face` (index before the split); `faces` are
    /// the post-split faces that contain it.
    Face {
        point: Vector2<f64>,
        face: usize,
        faces: Vec<usize>,
    },
}

/// A crease edge created by the split and the post-split faces it borders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSource {
    pub edge: usize,
    pub faces: Vec<usize>,
}

/// Old edge → new edge(s).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeMap {
    Kept(usize),
    Split(Vec<usize>),
}

impl EdgeMap {
    pub fn edges(&self) -> &[usize] {
        match self {
            EdgeMap::Kept(e) => std::slice::from_ref(e),
            EdgeMap::Split(es) => es,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitVertices {
    /// `(vertex, provenance)` for every new vertex, in creation order.
    pub source: Vec<(usize, VertexSource)>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitEdges {
    /// Crease edges created inside faces (not the halves of split edges).
    pub new: Vec<usize>,
    /// Indexed by old edge.
    pub map: Vec<EdgeMap>,
    /// One entry per `new` edge.
    pub source: Vec<EdgeSource>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitFaces {
    /// Indexed by old face: every post-split face descending from it.
    pub map: Vec<Vec<usize>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    pub vertices: SplitVertices,
    pub edges: SplitEdges,
    pub faces: SplitFaces,
}
