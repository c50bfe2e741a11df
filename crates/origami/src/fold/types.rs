//! Fold options and the change-summary a fold returns.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::graph::{EdgeAssignment, EdgeLayers, FaceOrder, Graph};
use crate::split::{EdgeMap, VertexSource};

/// What to crease and how.
///
/// - `assignment`: applied to new creases inside counter-clockwise faces;
///   clockwise faces get the mirrored assignment. Default `F`.
/// - `fold_angle`: degrees; `None` takes the flat angle of `assignment`.
/// - `folded_coords`: the folded form, if the caller already has it.
/// - `points`: vertices to insert wherever they land (ray origin, segment
///   endpoints).
/// - `layers`: which optional edge layers receive the new values; `None`
///   means `EdgeLayers::of(graph)`, so a graph without optional layers
///   stays without them.
#[derive(Clone, Debug, PartialEq)]
pub struct FoldOptions {
    pub assignment: EdgeAssignment,
    pub fold_angle: Option<f64>,
    pub folded_coords: Option<Vec<Vector3<f64>>>,
    pub points: Vec<Vector2<f64>>,
    pub layers: Option<EdgeLayers>,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            assignment: EdgeAssignment::Flat,
            fold_angle: None,
            folded_coords: None,
            points: Vec::new(),
            layers: None,
        }
    }
}

impl FoldOptions {
    pub fn new(assignment: EdgeAssignment) -> Self {
        Self {
            assignment,
            ..Self::default()
        }
    }

    pub fn with_fold_angle(mut self, degrees: f64) -> Self {
        self.fold_angle = Some(degrees);
        self
    }

    pub fn with_folded_coords(mut self, coords: Vec<Vector3<f64>>) -> Self {
        self.folded_coords = Some(coords);
        self
    }

    pub fn with_layers(mut self, layers: EdgeLayers) -> Self {
        self.layers = Some(layers);
        self
    }

    pub(crate) fn with_points(&self, points: Vec<Vector2<f64>>) -> Self {
        Self {
            points,
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VerticesEvent {
    /// Folded coordinates after the split; the new crease is still flat here.
    pub folded: Vec<Vector3<f64>>,
    pub source: Vec<(usize, VertexSource)>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgesEvent {
    pub new: Vec<usize>,
    pub map: Vec<EdgeMap>,
    /// Existing edges lying on the fold line.
    pub collinear: Vec<usize>,
    /// The collinear edges that were flat and got the fold's assignment.
    pub reassign: Vec<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacesEvent {
    pub new: Vec<usize>,
    pub map: Vec<Vec<usize>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersEvent {
    pub added: Vec<FaceOrder>,
    pub dropped: Vec<FaceOrder>,
}

/// Summary of what one fold changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FoldEvent {
    pub vertices: VerticesEvent,
    pub edges: EdgesEvent,
    pub faces: FacesEvent,
    pub orders: OrdersEvent,
}

/// The folded crease pattern and what changed.
#[derive(Clone, Debug)]
pub struct Folded {
    pub graph: Graph,
    pub event: FoldEvent,
}
