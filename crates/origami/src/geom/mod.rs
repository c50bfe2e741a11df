//! Planar geometry for fold lines and face polygons.
//!
//! - `FoldCfg`: the epsilon threaded through every fold operation.
//! - `Line` + `LineDomain`: a 2D line and the predicate that restricts it to a
//!   ray or a segment.
//! - Polygon predicates (winding, containment, convex overlap), Newell normals
//!   and 2D trilateration, all on `nalgebra` vectors.
//!
//! Face polygons are handed in as their xy projection; folded forms that
//! leave the plane are still split and compared in the xy-plane.

mod cfg;
mod types;
mod util;

pub use cfg::EPSILON;
pub(crate) use cfg::ZERO_LEN2;
pub use types::{FoldCfg, Line, LineDomain};
pub use util::{
    ccw_angle, convex_polygons_overlap, cross2, distance_to_segment, lerp, newell_normal,
    point_in_polygon, point_strictly_in_polygon, signed_area, trilateration2, xy,
};

#[cfg(test)]
mod tests;
