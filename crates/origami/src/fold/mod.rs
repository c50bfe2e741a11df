//! Fold applicator: crease a crease pattern along a line, ray or segment
//! drawn over its folded form.
//!
//! Purpose
//! - Keep the two coordinate spaces of a model in step through a change of
//!   topology: the split runs in folded space, new vertices are carried back
//!   to the crease pattern, and the new creases receive an assignment and
//!   fold angle chosen by the winding of the face they cut.
//! - Carry existing face orders onto the split faces and add the orders a
//!   flat mountain or valley fold implies.
//!
//! Conventions
//! - Input graphs are never mutated; `fold_graph` returns a new graph and a
//!   `FoldEvent` describing the change.
//! - Which edge layers receive values is decided by `FoldOptions::layers`.
//!
//! References
//! - FOLD file format, `edges_assignment` / `edges_foldAngle` / `faceOrders`.

mod apply;
mod assign;
mod collinear;
mod migrate;
mod transfer;
mod types;


pub use apply::{fold_graph, fold_line, fold_ray, fold_segment};
pub use assign::FoldAttributes;
pub use collinear::{collinear_edges, reassignable_edges};
pub use migrate::{migrate_face_orders, synthesize_face_orders, MigratedOrders};
pub use transfer::{recalculate_point_along_edge, transfer_point_in_face};
pub use types::{
    EdgesEvent, FacesEvent, FoldEvent, FoldOptions, Folded, OrdersEvent, VerticesEvent,
};
