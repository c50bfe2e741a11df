//! FOLD JSON frames.
//!
//! `FoldFrame` is the on-disk shape (FOLD key names, coordinates as plain
//! arrays of 2 or 3 numbers); `Graph` is the in-memory shape. Keys this crate
//! does not interpret are kept in `extra` and written back unchanged.

use std::collections::BTreeMap;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{OrigamiError, Result};
use crate::graph::{EdgeAssignment, FaceOrder, Graph};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FoldFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_spec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frame_classes: Vec<String>,

    #[serde(default)]
    pub vertices_coords: Vec<Vec<f64>>,
    #[serde(default)]
    pub edges_vertices: Vec<[usize; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges_assignment: Option<Vec<EdgeAssignment>>,
    #[serde(default, rename = "edges_foldAngle", skip_serializing_if = "Option::is_none")]
    pub edges_fold_angle: Option<Vec<f64>>,
    #[serde(default)]
    pub faces_vertices: Vec<Vec<usize>>,
    #[serde(default, rename = "faceOrders", skip_serializing_if = "Option::is_none")]
    pub face_orders: Option<Vec<FaceOrder>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faces_normal: Option<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faces_layer: Option<Vec<usize>>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl FoldFrame {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| OrigamiError::InvalidGraph(format!("FOLD JSON: {e}")))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OrigamiError::InvalidGraph(format!("FOLD JSON: {e}")))
    }
}

fn point3(p: &[f64], what: &str, i: usize) -> Result<Vector3<f64>> {
    match *p {
        [x, y] => Ok(Vector3::new(x, y, 0.0)),
        [x, y, z] => Ok(Vector3::new(x, y, z)),
        _ => Err(OrigamiError::InvalidGraph(format!(
            "{what} {i} has {} components, expected 2 or 3",
            p.len()
        ))),
    }
}

impl TryFrom<FoldFrame> for Graph {
    type Error = OrigamiError;

    fn try_from(frame: FoldFrame) -> Result<Graph> {
        let vertices_coords = frame
            .vertices_coords
            .iter()
            .enumerate()
            .map(|(i, p)| point3(p, "vertex", i))
            .collect::<Result<Vec<_>>>()?;
        let faces_normal = frame
            .faces_normal
            .map(|normals| {
                normals
                    .iter()
                    .enumerate()
                    .map(|(i, n)| point3(n, "face normal", i))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;
        if let Some(layer) = &frame.faces_layer {
            if layer.len() != frame.faces_vertices.len() {
                return Err(OrigamiError::InvalidGraph(format!(
                    "faces_layer has {} entries for {} faces",
                    layer.len(),
                    frame.faces_vertices.len()
                )));
            }
        }
        let graph = Graph {
            vertices_coords,
            edges_vertices: frame.edges_vertices,
            edges_assignment: frame.edges_assignment,
            edges_fold_angle: frame.edges_fold_angle,
            faces_vertices: frame.faces_vertices,
            face_orders: frame.face_orders,
            faces_normal,
            faces_layer: frame.faces_layer,
        };
        graph.validate()?;
        Ok(graph)
    }
}

impl From<&Graph> for FoldFrame {
    /// Coordinates are written 2D when every vertex lies in the xy-plane.
    fn from(graph: &Graph) -> Self {
        let planar = graph.vertices_coords.iter().all(|p| p.z == 0.0);
        let vertices_coords = graph
            .vertices_coords
            .iter()
            .map(|p| {
                if planar {
                    vec![p.x, p.y]
                } else {
                    vec![p.x, p.y, p.z]
                }
            })
            .collect();
        FoldFrame {
            vertices_coords,
            edges_vertices: graph.edges_vertices.clone(),
            edges_assignment: graph.edges_assignment.clone(),
            edges_fold_angle: graph.edges_fold_angle.clone(),
            faces_vertices: graph.faces_vertices.clone(),
            face_orders: graph.face_orders.clone(),
            faces_normal: graph
                .faces_normal
                .as_ref()
                .map(|ns| ns.iter().map(|n| vec![n.x, n.y, n.z]).collect()),
            faces_layer: graph.faces_layer.clone(),
            ..FoldFrame::default()
        }
    }
}

/// Parse a FOLD document straight into a validated graph.
pub fn graph_from_json(text: &str) -> Result<Graph> {
    Graph::try_from(FoldFrame::from_json(text)?)
}
