use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::orders::{faces_normal_of, linearize_face_orders, overlapping_face_orders_clusters};
use crate::error::{OrigamiError, Result};
use crate::graph::Graph;

/// Display offset of one face: move it `layer` steps along `vector`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceNudge {
    pub vector: Vector3<f64>,
    pub layer: usize,
}

/// Per-face nudges from the graph's face orders, one cluster at a time.
///
/// Layers count from the bottom of each cluster and repeat across clusters;
/// the vector is the normal of the cluster's lowest face. Faces without
/// orders get `None`. Any cyclic cluster fails the whole call.
pub fn nudge_faces_with_face_orders(graph: &Graph) -> Result<Vec<Option<FaceNudge>>> {
    let faces_normal = faces_normal_of(graph);
    let clusters = overlapping_face_orders_clusters(graph.orders());
    let mut nudges: Vec<Option<FaceNudge>> = vec![None; graph.num_faces()];
    for (i, (faces, orders)) in clusters.faces.iter().zip(&clusters.orders).enumerate() {
        let sequence = linearize_face_orders(orders, &faces_normal, None).map_err(|e| match e {
            OrigamiError::CyclicConstraints { .. } => {
                tracing::debug!(cluster = i, faces = faces.len(), "cyclic face orders");
                OrigamiError::CyclicConstraints { cluster: Some(i) }
            }
            other => other,
        })?;
        let vector = faces_normal[faces[0]];
        for (layer, face) in sequence.into_iter().enumerate() {
            if let Some(slot) = nudges.get_mut(face) {
                *slot = Some(FaceNudge { vector, layer });
            }
        }
    }
    Ok(nudges)
}

/// Nudges for a flat model with one global order: `+z`, layer = rank of the
/// face in `faces_layer`.
pub fn nudge_faces_with_faces_layer(faces_layer: &[usize]) -> Vec<FaceNudge> {
    let mut ranked: Vec<(usize, usize)> = faces_layer
        .iter()
        .enumerate()
        .map(|(f, &l)| (l, f))
        .collect();
    ranked.sort_unstable();
    let mut nudges = vec![
        FaceNudge {
            vector: Vector3::z(),
            layer: 0,
        };
        faces_layer.len()
    ];
    for (rank, (_, f)) in ranked.into_iter().enumerate() {
        nudges[f].layer = rank;
    }
    nudges
}
