//! Curated internal API (UNSTABLE).
//!
//! A convenience surface for the CLI and experiments. Breaking changes are
//! allowed.

// Geometry
pub use crate::geom::{FoldCfg, Line, LineDomain, EPSILON};
// Graph model and derived arrays
pub use crate::graph::special::{bare_square, rectangle, square};
pub use crate::graph::{
    face_under_point, make_edges_faces, make_faces_normal, make_faces_winding,
    make_vertices_coords_folded, EdgeAssignment, EdgeLayers, FaceOrder, Graph,
};
// Fold applicator
pub use crate::fold::{
    fold_graph, fold_line, fold_ray, fold_segment, FoldAttributes, FoldEvent, FoldOptions, Folded,
};
// Planar split
pub use crate::split::{split_graph_with_line_and_points, SplitResult};
// Layers
pub use crate::layers::{
    face_orders_subset, face_orders_to_directed_edges, flip_faces_layer, linearize_2d_faces,
    linearize_face_orders, make_faces_layer, nudge_faces_with_face_orders,
    nudge_faces_with_faces_layer, overlapping_face_orders_clusters, topological_sort, FaceNudge,
    FaceOrderClusters,
};
// FOLD JSON
pub use crate::format::{graph_from_json, FoldFrame};
// Random inputs
pub use crate::rand::{
    draw_face_orders, draw_fold_line, draw_fold_sequence, FaceOrdersCfg, RandomFaceOrders,
    ReplayToken as FoldReplay,
};
// Errors
pub use crate::error::{OrigamiError, Result};
