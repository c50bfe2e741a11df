//! Graph data types: the FOLD-style crease pattern, edge assignments, face
//! orders and the edge-layer capability flags.
//!
//! Arrays are index-aligned the FOLD way (`edges_assignment[e]` belongs to
//! `edges_vertices[e]`, and so on). Optional layers are `Option<Vec<_>>`; when
//! present they must have one entry per edge / face.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{OrigamiError, Result};
use crate::geom::xy;

/// Per-edge fold type, serialized as the single FOLD character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeAssignment {
    #[serde(rename = "B", alias = "b")]
    Boundary,
    #[serde(rename = "M", alias = "m")]
    Mountain,
    #[serde(rename = "V", alias = "v")]
    Valley,
    #[serde(rename = "F", alias = "f")]
    Flat,
    #[serde(rename = "J", alias = "j")]
    Joint,
    #[serde(rename = "C", alias = "c")]
    Cut,
    #[default]
    #[serde(rename = "U", alias = "u")]
    Unassigned,
}

impl EdgeAssignment {
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c.to_ascii_uppercase() {
            'B' => EdgeAssignment::Boundary,
            'M' => EdgeAssignment::Mountain,
            'V' => EdgeAssignment::Valley,
            'F' => EdgeAssignment::Flat,
            'J' => EdgeAssignment::Joint,
            'C' => EdgeAssignment::Cut,
            'U' => EdgeAssignment::Unassigned,
            _ => return None,
        })
    }

    pub fn as_char(&self) -> char {
        match self {
            EdgeAssignment::Boundary => 'B',
            EdgeAssignment::Mountain => 'M',
            EdgeAssignment::Valley => 'V',
            EdgeAssignment::Flat => 'F',
            EdgeAssignment::Joint => 'J',
            EdgeAssignment::Cut => 'C',
            EdgeAssignment::Unassigned => 'U',
        }
    }

    /// Fold angle (degrees) of a flat-folded crease with this assignment.
    pub fn flat_fold_angle(&self) -> f64 {
        match self {
            EdgeAssignment::Valley => 180.0,
            EdgeAssignment::Mountain => -180.0,
            _ => 0.0,
        }
    }

    /// The assignment seen from the other side of the paper: M and V swap.
    pub fn inverted(&self) -> Self {
        match self {
            EdgeAssignment::Valley => EdgeAssignment::Mountain,
            EdgeAssignment::Mountain => EdgeAssignment::Valley,
            other => *other,
        }
    }

    #[inline]
    pub fn is_folded(&self) -> bool {
        matches!(self, EdgeAssignment::Mountain | EdgeAssignment::Valley)
    }

    /// Neither a fold nor an edge of the paper: F and U.
    #[inline]
    pub fn is_flat(&self) -> bool {
        matches!(self, EdgeAssignment::Flat | EdgeAssignment::Unassigned)
    }

    /// Faces on both sides stay connected (everything except B and C).
    #[inline]
    pub fn connects_faces(&self) -> bool {
        !matches!(self, EdgeAssignment::Boundary | EdgeAssignment::Cut)
    }
}

/// Layer constraint `[a, b, sign]` between two overlapping faces, relative to
/// face `b`'s normal. With `b`'s normal agreeing with the reference normal,
/// `sign = +1` puts `a` below `b` and `sign = -1` puts `a` above `b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceOrder(pub usize, pub usize, pub i8);

impl FaceOrder {
    #[inline]
    pub fn new(a: usize, b: usize, sign: i8) -> Self {
        Self(a, b, sign)
    }
    #[inline]
    pub fn a(&self) -> usize {
        self.0
    }
    #[inline]
    pub fn b(&self) -> usize {
        self.1
    }
    #[inline]
    pub fn sign(&self) -> i8 {
        self.2
    }
    /// Same pair of faces, in either order.
    #[inline]
    pub fn same_pair(&self, f: usize, g: usize) -> bool {
        (self.0 == f && self.1 == g) || (self.0 == g && self.1 == f)
    }
}

/// Which optional edge layers a fold writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeLayers {
    pub assignment: bool,
    pub fold_angle: bool,
}

impl EdgeLayers {
    #[inline]
    pub fn all() -> Self {
        Self {
            assignment: true,
            fold_angle: true,
        }
    }

    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    /// Enable exactly the layers the graph already carries.
    #[inline]
    pub fn of(graph: &Graph) -> Self {
        Self {
            assignment: graph.edges_assignment.is_some(),
            fold_angle: graph.edges_fold_angle.is_some(),
        }
    }
}

/// Planar graph of an origami model.
///
/// Invariants:
/// - every index in `edges_vertices` / `faces_vertices` is `< vertices_coords.len()`;
/// - optional per-edge arrays have `edges_vertices.len()` entries, optional
///   per-face arrays have `faces_vertices.len()` entries;
/// - `face_orders` reference faces `< faces_vertices.len()` with sign ±1.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    pub vertices_coords: Vec<Vector3<f64>>,
    pub edges_vertices: Vec<[usize; 2]>,
    pub edges_assignment: Option<Vec<EdgeAssignment>>,
    pub edges_fold_angle: Option<Vec<f64>>,
    pub faces_vertices: Vec<Vec<usize>>,
    pub face_orders: Option<Vec<FaceOrder>>,
    pub faces_normal: Option<Vec<Vector3<f64>>>,
    pub faces_layer: Option<Vec<usize>>,
}

impl Graph {
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices_coords.len()
    }
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges_vertices.len()
    }
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces_vertices.len()
    }

    /// Assignment of edge `e`, if the layer exists.
    #[inline]
    pub fn assignment(&self, e: usize) -> Option<EdgeAssignment> {
        self.edges_assignment.as_ref().and_then(|a| a.get(e).copied())
    }

    /// Fold angle of edge `e`: the stored angle, else the flat angle of its
    /// assignment, else 0.
    pub fn fold_angle(&self, e: usize) -> f64 {
        if let Some(angle) = self.edges_fold_angle.as_ref().and_then(|a| a.get(e)) {
            return *angle;
        }
        self.assignment(e)
            .map(|a| a.flat_fold_angle())
            .unwrap_or(0.0)
    }

    /// Face loop as 3D points.
    pub fn face_points(&self, face: usize) -> Vec<Vector3<f64>> {
        self.faces_vertices[face]
            .iter()
            .map(|&v| self.vertices_coords[v])
            .collect()
    }

    /// Face loop projected onto the xy-plane.
    pub fn face_polygon(&self, face: usize) -> Vec<Vector2<f64>> {
        self.faces_vertices[face]
            .iter()
            .map(|&v| xy(&self.vertices_coords[v]))
            .collect()
    }

    /// Face orders, empty if the graph has none.
    #[inline]
    pub fn orders(&self) -> &[FaceOrder] {
        self.face_orders.as_deref().unwrap_or(&[])
    }

    /// Check index ranges and array alignment.
    pub fn validate(&self) -> Result<()> {
        let nv = self.num_vertices();
        let ne = self.num_edges();
        let nf = self.num_faces();
        for (e, ev) in self.edges_vertices.iter().enumerate() {
            if ev[0] >= nv || ev[1] >= nv {
                return Err(OrigamiError::InvalidGraph(format!(
                    "edge {e} references vertex out of range"
                )));
            }
        }
        for (f, fv) in self.faces_vertices.iter().enumerate() {
            if fv.iter().any(|&v| v >= nv) {
                return Err(OrigamiError::InvalidGraph(format!(
                    "face {f} references vertex out of range"
                )));
            }
        }
        if let Some(a) = &self.edges_assignment {
            if a.len() != ne {
                return Err(OrigamiError::InvalidGraph(format!(
                    "edges_assignment has {} entries for {ne} edges",
                    a.len()
                )));
            }
        }
        if let Some(a) = &self.edges_fold_angle {
            if a.len() != ne {
                return Err(OrigamiError::InvalidGraph(format!(
                    "edges_foldAngle has {} entries for {ne} edges",
                    a.len()
                )));
            }
        }
        if let Some(n) = &self.faces_normal {
            if n.len() != nf {
                return Err(OrigamiError::InvalidGraph(format!(
                    "faces_normal has {} entries for {nf} faces",
                    n.len()
                )));
            }
        }
        for order in self.orders() {
            if order.a() >= nf || order.b() >= nf {
                return Err(OrigamiError::InvalidGraph(format!(
                    "face order {order:?} references face out of range"
                )));
            }
            if order.sign() != 1 && order.sign() != -1 {
                return Err(OrigamiError::InvalidGraph(format!(
                    "face order {order:?} has sign other than ±1"
                )));
            }
        }
        Ok(())
    }
}
