//! Face stacking from pairwise face orders.
//!
//! Purpose
//! - Split face orders into independent clusters, turn each into a
//!   bottom-to-top sequence by topological sort, and map sequences to
//!   per-face layers or display nudges.
//!
//! Conventions
//! - `[a, b, +1]` with `b`'s normal agreeing with the reference normal puts
//!   `a` below `b`; a flipped `b` reverses that.
//! - A cycle is `OrigamiError::CyclicConstraints`, never an empty result.
//! - Linearization is only meaningful for coplanar faces; 3D models must be
//!   split into coplanar clusters by the caller.

mod directed;
mod nudge;
mod orders;

#[cfg(test)]
mod tests;

pub use directed::{connected_components, topological_sort};
pub use nudge::{nudge_faces_with_face_orders, nudge_faces_with_faces_layer, FaceNudge};
pub use orders::{
    face_orders_subset, face_orders_to_directed_edges, flip_faces_layer, linearize_2d_faces,
    linearize_face_orders, make_faces_layer, overlapping_face_orders_clusters, FaceOrderClusters,
};
