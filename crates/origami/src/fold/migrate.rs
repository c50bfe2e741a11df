//! Carry face orders across a split and add the ones a flat fold implies.
//!
//! A constraint `[a, b, s]` on a face that was split is copied onto every
//! child pair; a copy survives only if its two faces still overlap with
//! positive area in the folded form. A constraint with no surviving copy is
//! dropped and reported.

use super::assign::FoldAttributes;
use crate::graph::{faces_overlap, EdgeAssignment, FaceOrder, Graph};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MigratedOrders {
    pub orders: Vec<FaceOrder>,
    pub dropped: Vec<FaceOrder>,
}

/// Rewrite `orders` (pre-split face indices) onto the post-split faces of
/// `folded`, using `faces_map[old] = descendants`.
pub fn migrate_face_orders(
    folded: &Graph,
    orders: &[FaceOrder],
    faces_map: &[Vec<usize>],
    eps: f64,
) -> MigratedOrders {
    let mut out = MigratedOrders::default();
    for &order in orders {
        let (children_a, children_b) = (&faces_map[order.a()], &faces_map[order.b()]);
        if children_a.len() == 1 && children_b.len() == 1 {
            out.orders.push(FaceOrder::new(children_a[0], children_b[0], order.sign()));
            continue;
        }
        let before = out.orders.len();
        for &a in children_a {
            for &b in children_b {
                if faces_overlap(folded, a, b, eps) {
                    out.orders.push(FaceOrder::new(a, b, order.sign()));
                }
            }
        }
        if out.orders.len() == before {
            tracing::warn!(
                a = order.a(),
                b = order.b(),
                sign = order.sign(),
                "face order lost its overlap after split, dropped"
            );
            out.dropped.push(order);
        }
    }
    out
}

/// Orders between the two faces of each flat-folded crease: a valley puts
/// the faces face-to-face (`-1`), a mountain back-to-back (`+1`). Pairs that
/// are already constrained are skipped.
pub fn synthesize_face_orders(
    creases: &[(usize, FoldAttributes)],
    edges_faces: &[Vec<usize>],
    existing: &[FaceOrder],
    eps: f64,
) -> Vec<FaceOrder> {
    let mut added: Vec<FaceOrder> = Vec::new();
    for &(e, attrs) in creases {
        if !attrs.is_flat_fold(eps) {
            continue;
        }
        let [f1, f2] = match edges_faces[e].as_slice() {
            &[f1, f2] => [f1, f2],
            _ => continue,
        };
        if existing.iter().chain(added.iter()).any(|o| o.same_pair(f1, f2)) {
            continue;
        }
        let sign = match attrs.assignment {
            EdgeAssignment::Valley => -1,
            _ => 1,
        };
        added.push(FaceOrder::new(f1, f2, sign));
    }
    added
}
