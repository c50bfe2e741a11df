//! Point-in-face and face-face overlap queries (xy-plane).

use nalgebra::Vector2;

use super::types::Graph;
use crate::geom::{convex_polygons_overlap, point_in_polygon, point_strictly_in_polygon};

/// Faces containing `point`, boundary inclusive, ascending.
pub fn faces_containing_point(graph: &Graph, point: Vector2<f64>, eps: f64) -> Vec<usize> {
    (0..graph.num_faces())
        .filter(|&f| point_in_polygon(&graph.face_polygon(f), point, eps))
        .collect()
}

/// The face under `point`.
///
/// When the point sits on an edge shared by several faces, the tie is broken
/// by stepping a little along `vector`; if that does not settle it the lowest
/// face index wins.
pub fn face_under_point(
    graph: &Graph,
    point: Vector2<f64>,
    vector: Vector2<f64>,
    eps: f64,
) -> Option<usize> {
    let candidates = faces_containing_point(graph, point, eps);
    if candidates.len() <= 1 {
        return candidates.first().copied();
    }
    let len = vector.norm();
    if len > 0.0 {
        let nudged = point + vector * (10.0 * eps / len);
        if let Some(&f) = candidates
            .iter()
            .find(|&&f| point_strictly_in_polygon(&graph.face_polygon(f), nudged, eps))
        {
            return Some(f);
        }
    }
    candidates.first().copied()
}

/// Positive-area overlap of two (convex) faces.
pub fn faces_overlap(graph: &Graph, a: usize, b: usize, eps: f64) -> bool {
    convex_polygons_overlap(&graph.face_polygon(a), &graph.face_polygon(b), eps)
}
