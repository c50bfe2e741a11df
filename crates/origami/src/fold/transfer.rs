//! Carry new vertices from folded space back to the crease pattern.
//!
//! Each face of the folded form is a rigid image of its crease-pattern face,
//! so distances inside a face are preserved. Points split off an edge are
//! re-interpolated along the parent edge; points inside a face are located by
//! trilateration against three anchors of that face.

use nalgebra::{Vector2, Vector3};

use crate::error::{OrigamiError, Result};
use crate::geom::{cross2, lerp, trilateration2, xy};

/// Point at parameter `b` along the crease-pattern edge `vertices[0] → vertices[1]`.
#[inline]
pub fn recalculate_point_along_edge(cp: &[Vector3<f64>], vertices: [usize; 2], b: f64) -> Vector3<f64> {
    lerp(cp[vertices[0]], cp[vertices[1]], b)
}

/// Crease-pattern position of `vertex`, which sits inside the face
/// `face_vertices` at `folded[vertex]` in folded space.
///
/// `cp[v]` is `None` for vertices not yet placed. Anchors are the first three
/// placed, non-collinear vertices of the face.
pub fn transfer_point_in_face(
    folded: &[Vector3<f64>],
    cp: &[Option<Vector3<f64>>],
    face_vertices: &[usize],
    vertex: usize,
    eps: f64,
) -> Result<Vector3<f64>> {
    let anchors = pick_anchors(cp, face_vertices, vertex, eps).ok_or(
        OrigamiError::DegenerateGeometry {
            vertex: Some(vertex),
            reason: "face has no three placed, non-collinear anchors",
        },
    )?;
    let target = folded[vertex];
    let radii = anchors.map(|a| (folded[a] - target).norm());
    let pts: [Vector2<f64>; 3] = anchors.map(|a| cp[a].map(|p| xy(&p)).unwrap_or_else(Vector2::zeros));
    let z = cp[anchors[0]].map(|p| p.z).unwrap_or(0.0);
    let p = trilateration2(pts, radii).ok_or(OrigamiError::DegenerateGeometry {
        vertex: Some(vertex),
        reason: "trilateration failed",
    })?;
    Ok(Vector3::new(p.x, p.y, z))
}

fn pick_anchors(
    cp: &[Option<Vector3<f64>>],
    face_vertices: &[usize],
    vertex: usize,
    eps: f64,
) -> Option<[usize; 3]> {
    let placed: Vec<(usize, Vector2<f64>)> = face_vertices
        .iter()
        .filter(|&&v| v != vertex)
        .filter_map(|&v| cp.get(v).copied().flatten().map(|p| (v, xy(&p))))
        .collect();
    let &(a, pa) = placed.first()?;
    let &(b, pb) = placed.iter().find(|(_, p)| (p - pa).norm() > eps)?;
    let ab = pb - pa;
    let &(c, _) = placed
        .iter()
        .find(|(_, p)| cross2(ab, p - pa).abs() > eps * ab.norm())?;
    Some([a, b, c])
}
