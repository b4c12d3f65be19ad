//! Numerical tolerances shared across the crate.
//!
//! Every near-zero decision in transform inversion goes through
//! [`is_near_zero`], so there is exactly one epsilon to reason about.

/// Magnitude below which a value is treated as zero when inverting a transform.
///
/// Applies to the deviation of each linear element from the identity and to
/// the determinant of the linear part. The comparison is performed on the
/// `f32` magnitude widened to `f64`.
pub const INVERT_TOLERANCE: f64 = 1e-6;

/// Returns true if `|v|` is strictly below [`INVERT_TOLERANCE`].
#[inline]
pub fn is_near_zero(v: f32) -> bool {
    f64::from(v.abs()) < INVERT_TOLERANCE
}
