//! Random fold sequences and face-order sets (replay tokens).
//!
//! Purpose
//! - Reproducible inputs for benches and property tests: fold lines across
//!   the unit square, and acyclic face orders drawn from a hidden stack.
//!
//! Model
//! - A fold line passes through a uniform point of the square at a uniform
//!   angle. Assignments are drawn from `{V, M}`.
//! - Face orders: shuffle `0..n` into a bottom-to-top stack, give each face
//!   a `±z` normal, and emit constraints between random stack pairs with the
//!   sign that agrees with the stack. The result is acyclic by construction.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use nalgebra::{Vector2, Vector3};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::geom::Line;
use crate::graph::{EdgeAssignment, FaceOrder};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Fold line through a random point of `[margin, 1 - margin]²` at a random angle.
pub fn draw_fold_line(margin: f64, tok: ReplayToken) -> Line {
    let mut rng = tok.to_std_rng();
    draw_line(&mut rng, margin)
}

fn draw_line<R: Rng>(rng: &mut R, margin: f64) -> Line {
    let m = margin.clamp(0.0, 0.49);
    let origin = Vector2::new(rng.gen_range(m..=1.0 - m), rng.gen_range(m..=1.0 - m));
    let theta = rng.gen::<f64>() * std::f64::consts::PI;
    Line::new(origin, Vector2::new(theta.cos(), theta.sin()))
}

/// `count` fold lines with alternating-at-random valley / mountain assignments.
pub fn draw_fold_sequence(count: usize, margin: f64, tok: ReplayToken) -> Vec<(Line, EdgeAssignment)> {
    let mut rng = tok.to_std_rng();
    (0..count)
        .map(|_| {
            let line = draw_line(&mut rng, margin);
            let assignment = if rng.gen_bool(0.5) {
                EdgeAssignment::Valley
            } else {
                EdgeAssignment::Mountain
            };
            (line, assignment)
        })
        .collect()
}

/// Face-order sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct FaceOrdersCfg {
    pub num_faces: usize,
    /// Probability that a given stack pair is constrained.
    pub density: f64,
    /// Probability that a face's normal points down (`-z`).
    pub flipped: f64,
}

impl Default for FaceOrdersCfg {
    fn default() -> Self {
        Self {
            num_faces: 12,
            density: 0.3,
            flipped: 0.5,
        }
    }
}

/// An acyclic face-order set and the stack it was drawn from.
#[derive(Clone, Debug)]
pub struct RandomFaceOrders {
    /// Faces bottom to top along `+z`.
    pub stack: Vec<usize>,
    pub faces_normal: Vec<Vector3<f64>>,
    pub orders: Vec<FaceOrder>,
}

pub fn draw_face_orders(cfg: FaceOrdersCfg, tok: ReplayToken) -> RandomFaceOrders {
    let mut rng = tok.to_std_rng();
    let n = cfg.num_faces;
    let mut stack: Vec<usize> = (0..n).collect();
    stack.shuffle(&mut rng);
    let faces_normal: Vec<Vector3<f64>> = (0..n)
        .map(|_| {
            if rng.gen_bool(cfg.flipped.clamp(0.0, 1.0)) {
                -Vector3::z()
            } else {
                Vector3::z()
            }
        })
        .collect();
    let density = cfg.density.clamp(0.0, 1.0);
    let mut orders = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if !rng.gen_bool(density) {
                continue;
            }
            let (lower, upper) = (stack[i], stack[j]);
            // sign is read against the second face's normal
            let order = if rng.gen_bool(0.5) {
                let sign = if faces_normal[upper].z > 0.0 { 1 } else { -1 };
                FaceOrder::new(lower, upper, sign)
            } else {
                let sign = if faces_normal[lower].z > 0.0 { -1 } else { 1 };
                FaceOrder::new(upper, lower, sign)
            };
            orders.push(order);
        }
    }
    RandomFaceOrders {
        stack,
        faces_normal,
        orders,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Line;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken::new(42, 7);
        let a = draw_fold_sequence(5, 0.1, tok);
        let b = draw_fold_sequence(5, 0.1, tok);
        assert_eq!(a, b);
        let c = draw_fold_sequence(5, 0.1, ReplayToken::new(42, 8));
        assert_ne!(a, c);
    }

    #[test]
    fn fold_lines_cross_the_margin_box() {
        for index in 0..32 {
            let Line { origin, vector } = draw_fold_line(0.2, ReplayToken::new(3, index));
            assert!((0.2..=0.8).contains(&origin.x) && (0.2..=0.8).contains(&origin.y));
            assert!((vector.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn face_orders_reference_stack_faces() {
        let cfg = FaceOrdersCfg {
            density: 1.0,
            ..FaceOrdersCfg::default()
        };
        let drawn = draw_face_orders(cfg, ReplayToken::new(9, 0));
        let n = cfg.num_faces;
        assert_eq!(drawn.orders.len(), n * (n - 1) / 2);
        let mut stack = drawn.stack.clone();
        stack.sort_unstable();
        assert_eq!(stack, (0..n).collect::<Vec<_>>());
        assert!(drawn.orders.iter().all(|o| o.a() < n && o.b() < n && o.sign().abs() == 1));

        let empty = draw_face_orders(FaceOrdersCfg { density: 0.0, ..cfg }, ReplayToken::new(9, 0));
        assert!(empty.orders.is_empty());
    }
}
