//! Origami graph (FOLD-style arrays) and the queries built on it.
//!
//! Purpose
//! - `Graph` holds one coordinate space (crease pattern or folded form);
//!   the other space travels as a separate, index-aligned coordinate array.
//! - Derived adjacency (`make_*`) is recomputed on demand, never stored.
//! - `make_vertices_coords_folded` turns a crease pattern into its folded
//!   form by rigid hinge rotations from a root face.
//!
//! Conventions
//! - Winding is measured in the xy-plane; counter-clockwise is `true`.
//! - Fold angles are degrees, valley positive.

mod folded;
mod make;
mod overlap;
pub mod special;
mod types;

pub use folded::{make_faces_isometry, make_vertices_coords_folded};
pub use make::{
    edge_key, make_edges_assignment, make_edges_faces, make_edges_fold_angle, make_edges_lookup,
    make_faces_edges, make_faces_normal, make_faces_winding,
};
pub use overlap::{face_under_point, faces_containing_point, faces_overlap};
pub use types::{EdgeAssignment, EdgeLayers, FaceOrder, Graph};

#[cfg(test)]
mod tests;
