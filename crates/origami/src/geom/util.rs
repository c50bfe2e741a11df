use nalgebra::{Vector2, Vector3};

use super::cfg::ZERO_LEN2;

/// z-component of the 3D cross product of two planar vectors.
#[inline]
pub fn cross2(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Projection onto the xy-plane.
#[inline]
pub fn xy(p: &Vector3<f64>) -> Vector2<f64> {
    Vector2::new(p.x, p.y)
}

#[inline]
pub fn lerp(a: Vector3<f64>, b: Vector3<f64>, t: f64) -> Vector3<f64> {
    a + (b - a) * t
}

/// Counter-clockwise angle from `a` to `b`, in `[0, 2π)`.
#[inline]
pub fn ccw_angle(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let angle = cross2(a, b).atan2(a.dot(&b));
    if angle < 0.0 {
        angle + std::f64::consts::TAU
    } else {
        angle
    }
}

/// Shoelace area; positive for counter-clockwise loops.
pub fn signed_area(poly: &[Vector2<f64>]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for k in 0..n {
        acc += cross2(poly[k], poly[(k + 1) % n]);
    }
    0.5 * acc
}

pub fn distance_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let d = b - a;
    let len2 = d.norm_squared();
    if len2 <= ZERO_LEN2 {
        return (p - a).norm();
    }
    let s = ((p - a).dot(&d) / len2).clamp(0.0, 1.0);
    (p - (a + d * s)).norm()
}

fn near_boundary(poly: &[Vector2<f64>], p: Vector2<f64>, eps: f64) -> bool {
    let n = poly.len();
    (0..n).any(|k| distance_to_segment(p, poly[k], poly[(k + 1) % n]) <= eps)
}

fn crossing_number_inside(poly: &[Vector2<f64>], p: Vector2<f64>) -> bool {
    let n = poly.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (poly[i], poly[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Inclusive containment: points within `eps` of the boundary count as inside.
pub fn point_in_polygon(poly: &[Vector2<f64>], p: Vector2<f64>, eps: f64) -> bool {
    if poly.len() < 3 {
        return false;
    }
    near_boundary(poly, p, eps) || crossing_number_inside(poly, p)
}

/// Exclusive containment: inside and farther than `eps` from every edge.
pub fn point_strictly_in_polygon(poly: &[Vector2<f64>], p: Vector2<f64>, eps: f64) -> bool {
    if poly.len() < 3 {
        return false;
    }
    !near_boundary(poly, p, eps) && crossing_number_inside(poly, p)
}

fn project(poly: &[Vector2<f64>], axis: Vector2<f64>) -> (f64, f64) {
    poly.iter()
        .map(|p| p.dot(&axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}

/// Separating-axis test for two convex polygons.
///
/// Touching along an edge or a vertex (overlap thinner than `eps`) does not
/// count; only a positive-area intersection does.
pub fn convex_polygons_overlap(a: &[Vector2<f64>], b: &[Vector2<f64>], eps: f64) -> bool {
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    for poly in [a, b] {
        let n = poly.len();
        for k in 0..n {
            let edge = poly[(k + 1) % n] - poly[k];
            let len = edge.norm();
            if len * len <= ZERO_LEN2 {
                continue;
            }
            let axis = Vector2::new(-edge.y, edge.x) / len;
            let (a_lo, a_hi) = project(a, axis);
            let (b_lo, b_hi) = project(b, axis);
            if a_hi <= b_lo + eps || b_hi <= a_lo + eps {
                return false;
            }
        }
    }
    true
}

/// Unit normal of a (possibly non-planar) loop by Newell's method.
/// `None` for loops with no area.
pub fn newell_normal(poly: &[Vector3<f64>]) -> Option<Vector3<f64>> {
    let n = poly.len();
    let mut acc: Vector3<f64> = Vector3::zeros();
    for k in 0..n {
        let p = poly[k];
        let q = poly[(k + 1) % n];
        acc.x += (p.y - q.y) * (p.z + q.z);
        acc.y += (p.z - q.z) * (p.x + q.x);
        acc.z += (p.x - q.x) * (p.y + q.y);
    }
    let len = acc.norm();
    if len * len <= ZERO_LEN2 {
        None
    } else {
        Some(acc / len)
    }
}

/// Locate a point from its distances to three known anchors (2D).
///
/// Returns `None` when the anchors coincide or are collinear.
pub fn trilateration2(pts: [Vector2<f64>; 3], radii: [f64; 3]) -> Option<Vector2<f64>> {
    let p01 = pts[1] - pts[0];
    let p02 = pts[2] - pts[0];
    let d = p01.norm();
    if d * d <= ZERO_LEN2 {
        return None;
    }
    let ex = p01 / d;
    let i = ex.dot(&p02);
    let perp = p02 - ex * i;
    let perp_len = perp.norm();
    if perp_len * perp_len <= ZERO_LEN2 {
        return None;
    }
    let ey = perp / perp_len;
    let j = ey.dot(&p02);
    let x = (radii[0].powi(2) - radii[1].powi(2) + d * d) / (2.0 * d);
    let y = (radii[0].powi(2) - radii[2].powi(2) + i * i + j * j) / (2.0 * j) - (i * x) / j;
    let out = pts[0] + ex * x + ey * y;
    if out.x.is_finite() && out.y.is_finite() {
        Some(out)
    } else {
        None
    }
}
