//! Rigid folding of a crease pattern into folded vertex coordinates.
//!
//! Faces are visited breadth-first from a root face that stays fixed. Each
//! face inherits its parent's isometry composed with a hinge rotation about
//! the shared edge by that edge's fold angle. Boundary and cut edges do not
//! connect faces; disconnected pieces are rooted at their lowest face.

use std::collections::VecDeque;

use nalgebra::{Isometry3, Point3, Unit, UnitQuaternion, Vector3};

use super::make::{make_edges_faces, make_faces_edges};
use super::types::Graph;
use crate::geom::ZERO_LEN2;

/// Hinge about the line through `a` and `b` (in that loop order of the
/// parent face). Positive (valley) angles lift the child face toward the
/// parent's normal.
fn hinge(a: Vector3<f64>, b: Vector3<f64>, fold_angle_deg: f64) -> Isometry3<f64> {
    let axis = b - a;
    if fold_angle_deg == 0.0 || axis.norm_squared() <= ZERO_LEN2 {
        return Isometry3::identity();
    }
    let axis = Unit::new_normalize(axis);
    let rot = UnitQuaternion::from_axis_angle(&axis, -fold_angle_deg.to_radians());
    Isometry3::rotation_wrt_point(rot, Point3::from(a))
}

/// Per-face isometries taking crease-pattern space to folded space.
pub fn make_faces_isometry(graph: &Graph, root_face: usize) -> Vec<Isometry3<f64>> {
    let nf = graph.num_faces();
    let faces_edges = make_faces_edges(graph);
    let edges_faces = make_edges_faces(graph);
    let mut faces_iso: Vec<Option<Isometry3<f64>>> = vec![None; nf];
    let roots = std::iter::once(root_face)
        .filter(|&r| r < nf)
        .chain(0..nf);
    let mut queue = VecDeque::new();
    for root in roots {
        if faces_iso[root].is_some() {
            continue;
        }
        faces_iso[root] = Some(Isometry3::identity());
        queue.push_back(root);
        while let Some(f) = queue.pop_front() {
            let parent = faces_iso[f].unwrap_or_else(Isometry3::identity);
            let fv = &graph.faces_vertices[f];
            let n = fv.len();
            for (k, edge) in faces_edges[f].iter().enumerate() {
                let Some(e) = *edge else { continue };
                if !graph.assignment(e).map_or(true, |a| a.connects_faces()) {
                    continue;
                }
                for &g in &edges_faces[e] {
                    if g == f || faces_iso[g].is_some() {
                        continue;
                    }
                    let a = graph.vertices_coords[fv[k]];
                    let b = graph.vertices_coords[fv[(k + 1) % n]];
                    faces_iso[g] = Some(parent * hinge(a, b, graph.fold_angle(e)));
                    queue.push_back(g);
                }
            }
        }
    }
    faces_iso
        .into_iter()
        .map(|iso| iso.unwrap_or_else(Isometry3::identity))
        .collect()
}

/// Folded coordinates, one per vertex, with `root_face` held in place.
///
/// A vertex takes the isometry of the first face (by index) that contains
/// it; vertices in no face keep their crease-pattern position.
pub fn make_vertices_coords_folded(graph: &Graph, root_face: usize) -> Vec<Vector3<f64>> {
    let faces_iso = make_faces_isometry(graph, root_face);
    let mut assigned = vec![false; graph.num_vertices()];
    let mut folded = graph.vertices_coords.clone();
    for (f, fv) in graph.faces_vertices.iter().enumerate() {
        for &v in fv {
            if assigned[v] {
                continue;
            }
            assigned[v] = true;
            folded[v] = faces_iso[f]
                .transform_point(&Point3::from(graph.vertices_coords[v]))
                .coords;
        }
    }
    folded
}
