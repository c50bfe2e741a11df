//! Tolerance defaults (internal).
//!
//! The fold operations take an explicit `FoldCfg`; these constants are only
//! its defaults and the fixed thresholds that never need tuning.

/// Default line-inclusion / winding tolerance.
pub const EPSILON: f64 = 1e-6;
/// Below this squared length a direction vector is treated as zero.
pub(crate) const ZERO_LEN2: f64 = 1e-24;
