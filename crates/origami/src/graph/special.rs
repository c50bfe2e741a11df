//! Ready-made crease patterns (sheets of paper).

use nalgebra::Vector3;

use super::types::{EdgeAssignment, Graph};

/// Axis-aligned `width × height` rectangle with its lower-left corner at the
/// origin: four boundary edges, one counter-clockwise face.
pub fn rectangle(width: f64, height: f64) -> Graph {
    Graph {
        vertices_coords: vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(width, 0.0, 0.0),
            Vector3::new(width, height, 0.0),
            Vector3::new(0.0, height, 0.0),
        ],
        edges_vertices: vec![[0, 1], [1, 2], [2, 3], [3, 0]],
        edges_assignment: Some(vec![EdgeAssignment::Boundary; 4]),
        edges_fold_angle: Some(vec![0.0; 4]),
        faces_vertices: vec![vec![0, 1, 2, 3]],
        ..Graph::default()
    }
}

/// Unit square.
pub fn square() -> Graph {
    rectangle(1.0, 1.0)
}

/// Unit square carrying only coordinates and topology (no optional layers).
pub fn bare_square() -> Graph {
    Graph {
        edges_assignment: None,
        edges_fold_angle: None,
        ..square()
    }
}
