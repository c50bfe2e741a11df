//! Fold applicator and face-order layering for FOLD-style origami graphs.
//!
//! - `fold`: crease a model along a line, ray or segment drawn over its
//!   folded form, keeping crease-pattern and folded coordinates in step.
//! - `layers`: turn pairwise face orders into stacking sequences.
//! - `split`, `graph`, `geom`: the planar machinery both rest on.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer
//!   `api` or `prelude` for imports.

pub mod api;
pub mod error;
pub mod fold;
pub mod format;
pub mod geom;
pub mod graph;
pub mod layers;
pub mod rand;
pub mod split;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{OrigamiError, Result};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{OrigamiError, Result};
    pub use crate::fold::{fold_line, fold_ray, fold_segment, FoldEvent, FoldOptions, Folded};
    pub use crate::geom::{FoldCfg, Line, LineDomain};
    pub use crate::graph::{EdgeAssignment, EdgeLayers, FaceOrder, Graph};
    pub use crate::layers::{linearize_2d_faces, linearize_face_orders};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
