//! Derived adjacency and per-face attributes. Nothing here is stored on the
//! graph; callers recompute after every topology change.

use std::collections::HashMap;

use nalgebra::Vector3;

use super::types::{EdgeAssignment, Graph};
use crate::geom::{newell_normal, signed_area};

/// Order-independent key of an undirected edge.
#[inline]
pub fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Vertex pair → edge index.
pub fn make_edges_lookup(edges_vertices: &[[usize; 2]]) -> HashMap<(usize, usize), usize> {
    edges_vertices
        .iter()
        .enumerate()
        .map(|(e, ev)| (edge_key(ev[0], ev[1]), e))
        .collect()
}

/// For each face, the edge between consecutive loop vertices `k → k+1`
/// (`None` where the graph has no such edge).
pub fn make_faces_edges(graph: &Graph) -> Vec<Vec<Option<usize>>> {
    let lookup = make_edges_lookup(&graph.edges_vertices);
    graph
        .faces_vertices
        .iter()
        .map(|fv| {
            let n = fv.len();
            (0..n)
                .map(|k| lookup.get(&edge_key(fv[k], fv[(k + 1) % n])).copied())
                .collect()
        })
        .collect()
}

/// For each edge, the faces whose loop runs along it (unsorted, no repeats).
pub fn make_edges_faces(graph: &Graph) -> Vec<Vec<usize>> {
    let mut edges_faces = vec![Vec::new(); graph.num_edges()];
    for (f, fe) in make_faces_edges(graph).into_iter().enumerate() {
        for e in fe.into_iter().flatten() {
            if !edges_faces[e].contains(&f) {
                edges_faces[e].push(f);
            }
        }
    }
    edges_faces
}

/// Counter-clockwise (in the xy-plane) = `true`.
///
/// A face with `|area| <= eps` (seen edge-on) has no winding; it counts as
/// counter-clockwise, so creases inside it take the forward assignment.
pub fn make_faces_winding(graph: &Graph, eps: f64) -> Vec<bool> {
    (0..graph.num_faces())
        .map(|f| {
            let area = signed_area(&graph.face_polygon(f));
            if area.abs() <= eps {
                tracing::debug!(face = f, area, "face has no winding, taken as counter-clockwise");
                return true;
            }
            area > 0.0
        })
        .collect()
}

/// Unit normal per face; degenerate faces get the zero vector.
pub fn make_faces_normal(graph: &Graph) -> Vec<Vector3<f64>> {
    (0..graph.num_faces())
        .map(|f| newell_normal(&graph.face_points(f)).unwrap_or_else(Vector3::zeros))
        .collect()
}

/// Fold angles from assignments (`V → 180`, `M → −180`, else 0).
pub fn make_edges_fold_angle(graph: &Graph) -> Vec<f64> {
    match &graph.edges_assignment {
        Some(assignments) => assignments.iter().map(|a| a.flat_fold_angle()).collect(),
        None => vec![0.0; graph.num_edges()],
    }
}

/// Assignments inferred from topology and fold angles: edges with fewer than
/// two faces are `B`, signed angles give `V` / `M`, the rest `U`.
pub fn make_edges_assignment(graph: &Graph) -> Vec<EdgeAssignment> {
    let edges_faces = make_edges_faces(graph);
    (0..graph.num_edges())
        .map(|e| {
            let angle = graph
                .edges_fold_angle
                .as_ref()
                .and_then(|a| a.get(e).copied())
                .unwrap_or(0.0);
            if edges_faces[e].len() < 2 {
                EdgeAssignment::Boundary
            } else if angle > 0.0 {
                EdgeAssignment::Valley
            } else if angle < 0.0 {
                EdgeAssignment::Mountain
            } else {
                EdgeAssignment::Unassigned
            }
        })
        .collect()
}
