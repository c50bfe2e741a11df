//! Winding-based choice of assignment and fold angle for a crease.

use crate::graph::{EdgeAssignment, EdgeLayers, Graph};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoldAttributes {
    pub assignment: EdgeAssignment,
    pub fold_angle: f64,
}

impl FoldAttributes {
    /// `fold_angle` defaults to the flat angle of `assignment`.
    pub fn new(assignment: EdgeAssignment, fold_angle: Option<f64>) -> Self {
        Self {
            assignment,
            fold_angle: fold_angle.unwrap_or_else(|| assignment.flat_fold_angle()),
        }
    }

    /// Seen from the other side of the paper.
    pub fn mirrored(&self) -> Self {
        Self {
            assignment: self.assignment.inverted(),
            fold_angle: if self.fold_angle == 0.0 {
                0.0
            } else {
                -self.fold_angle
            },
        }
    }

    /// Forward attributes for a counter-clockwise face, mirrored otherwise.
    #[inline]
    pub fn select(&self, counter_clockwise: bool) -> Self {
        if counter_clockwise {
            *self
        } else {
            self.mirrored()
        }
    }

    #[inline]
    pub fn is_flat_fold(&self, eps: f64) -> bool {
        self.assignment.is_folded() && (self.fold_angle.abs() - 180.0).abs() <= eps
    }
}

/// Write `attrs` to edge `e`, only into the enabled layers.
pub(crate) fn write_attributes(graph: &mut Graph, e: usize, attrs: FoldAttributes, layers: EdgeLayers) {
    if layers.assignment {
        if let Some(slot) = graph.edges_assignment.as_mut().and_then(|a| a.get_mut(e)) {
            *slot = attrs.assignment;
        }
    }
    if layers.fold_angle {
        if let Some(slot) = graph.edges_fold_angle.as_mut().and_then(|a| a.get_mut(e)) {
            *slot = attrs.fold_angle;
        }
    }
}
