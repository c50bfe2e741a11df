//! Fold tolerances and the 2D fold line.
//!
//! - `FoldCfg`: centralizes the epsilon used for line inclusion and winding.
//! - `Line`: origin + direction, not normalized. Parameters `t` are measured
//!   in units of `vector`, so a segment `p0 → p1` is `t ∈ [0, 1]`.
//! - `LineDomain`: line / ray / segment restriction on `t`.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::cfg::{EPSILON, ZERO_LEN2};
use super::util::cross2;

/// Fold configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct FoldCfg {
    pub eps: f64,
}

impl Default for FoldCfg {
    fn default() -> Self {
        Self { eps: EPSILON }
    }
}

/// A 2D line `origin + t * vector`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub origin: Vector2<f64>,
    pub vector: Vector2<f64>,
}

impl Line {
    #[inline]
    pub fn new(origin: Vector2<f64>, vector: Vector2<f64>) -> Self {
        Self { origin, vector }
    }

    /// Line through `a` and `b` with `t = 0` at `a` and `t = 1` at `b`.
    #[inline]
    pub fn from_points(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            origin: a,
            vector: b - a,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vector.norm_squared() <= ZERO_LEN2
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Vector2<f64> {
        self.origin + self.vector * t
    }

    /// Parameter of the orthogonal projection of `p` onto the line.
    #[inline]
    pub fn param_of(&self, p: Vector2<f64>) -> f64 {
        (p - self.origin).dot(&self.vector) / self.vector.norm_squared()
    }

    /// Unsigned distance from `p` to the infinite line.
    #[inline]
    pub fn distance_to(&self, p: Vector2<f64>) -> f64 {
        cross2(self.vector, p - self.origin).abs() / self.vector.norm()
    }

    /// Intersection with the segment `p → q`.
    ///
    /// Returns `(t, b)`: `t` along the line, `b ∈ ℝ` along the segment
    /// (`0` at `p`, `1` at `q`). `None` when parallel within `eps`.
    pub fn intersect_segment(
        &self,
        p: Vector2<f64>,
        q: Vector2<f64>,
        eps: f64,
    ) -> Option<(f64, f64)> {
        let d = q - p;
        let denom = cross2(self.vector, d);
        if denom.abs() <= eps * self.vector.norm() * d.norm() {
            return None;
        }
        let w = p - self.origin;
        let t = cross2(w, d) / denom;
        let b = cross2(w, self.vector) / denom;
        Some((t, b))
    }
}

/// Restriction of a `Line` to a line, a ray (`t ≥ 0`) or a segment (`t ∈ [0,1]`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDomain {
    #[default]
    Line,
    Ray,
    Segment,
}

impl LineDomain {
    /// Inclusive domain test with slack `eps` (in units of the line parameter).
    #[inline]
    pub fn includes(&self, t: f64, eps: f64) -> bool {
        match self {
            LineDomain::Line => true,
            LineDomain::Ray => t >= -eps,
            LineDomain::Segment => t >= -eps && t <= 1.0 + eps,
        }
    }
}
