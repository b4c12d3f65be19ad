//! 2D affine transformation type.

use super::format::write_general;
use super::Vec2;
use crate::tolerance::is_near_zero;
use num_traits::Zero;
use std::fmt;
use std::ops::Mul;

/// A 2D affine transformation matrix.
///
/// Conceptually a 2x3 matrix in row-major order:
/// ```text
/// | sx  hx  ox |
/// | hy  sy  oy |
/// ```
/// with an implicit `[0 0 1]` bottom row.
///
/// The diagonal is stored minus one, so the all-zero value (and therefore
/// [`Default`]) is the identity. Use [`Affine2::elems`] to read the
/// conventional elements back.
///
/// # Example
///
/// ```
/// use planar::{Affine2, Vec2};
/// use std::f32::consts::FRAC_PI_2;
///
/// let t = Affine2::default()
///     .rotate(Vec2::new(0.0, 0.0), FRAC_PI_2)
///     .offset(Vec2::new(10.0, 0.0));
///
/// let p = t.transform(Vec2::new(1.0, 0.0));
/// assert!((p.x - 10.0).abs() < 1e-6);
/// assert!((p.y - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Affine2 {
    // sx - 1, hx, ox
    a: f32,
    b: f32,
    c: f32,
    // hy, sy - 1, oy
    d: f32,
    e: f32,
    f: f32,
}

impl Affine2 {
    /// The identity transform. Equal to `Affine2::default()`.
    pub const IDENTITY: Self = Self {
        a: 0.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
        e: 0.0,
        f: 0.0,
    };

    /// Creates a transform from conventional matrix elements.
    ///
    /// `sx, hx, ox` form the first row (x scale, x shear, x translation),
    /// `hy, sy, oy` the second.
    #[inline]
    pub fn new(sx: f32, hx: f32, ox: f32, hy: f32, sy: f32, oy: f32) -> Self {
        Self {
            a: sx - 1.0,
            b: hx,
            c: ox,
            d: hy,
            e: sy - 1.0,
            f: oy,
        }
    }

    /// Adds `offset` to the translation column.
    #[inline]
    pub fn offset(self, offset: Vec2) -> Self {
        Self {
            c: self.c + offset.x,
            f: self.f + offset.y,
            ..self
        }
    }

    /// Offsets in place; see [`offset`](Self::offset).
    #[inline]
    pub fn offset_in_place(&mut self, offset: Vec2) {
        *self = self.offset(offset);
    }

    /// Scales by `factor` about `origin`.
    pub fn scale(self, origin: Vec2, factor: Vec2) -> Self {
        self.around(origin, |t| t.scale_about_zero(factor))
    }

    /// Scales in place; see [`scale`](Self::scale).
    pub fn scale_in_place(&mut self, origin: Vec2, factor: Vec2) {
        *self = self.scale(origin, factor);
    }

    /// Rotates by `radians` (counter-clockwise) about `origin`.
    pub fn rotate(self, origin: Vec2, radians: f32) -> Self {
        self.around(origin, |t| t.rotate_about_zero(radians))
    }

    /// Rotates in place; see [`rotate`](Self::rotate).
    pub fn rotate_in_place(&mut self, origin: Vec2, radians: f32) {
        *self = self.rotate(origin, radians);
    }

    /// Shears about `origin`; x is skewed by `tan(radians_x) * y` and
    /// y by `tan(radians_y) * x`.
    pub fn shear(self, origin: Vec2, radians_x: f32, radians_y: f32) -> Self {
        self.around(origin, |t| t.shear_about_zero(radians_x, radians_y))
    }

    /// Shears in place; see [`shear`](Self::shear).
    pub fn shear_in_place(&mut self, origin: Vec2, radians_x: f32, radians_y: f32) {
        *self = self.shear(origin, radians_x, radians_y);
    }

    /// Composes this transform with another (`self * other`).
    ///
    /// The resulting transform applies `other` first, then `self`.
    /// Works on the biased fields directly.
    pub fn compose(self, other: Self) -> Self {
        let (l, r) = (self, other);
        Self {
            a: (l.a + 1.0) * (r.a + 1.0) + l.b * r.d - 1.0,
            b: (l.a + 1.0) * r.b + l.b * (r.e + 1.0),
            c: (l.a + 1.0) * r.c + l.b * r.f + l.c,
            d: l.d * (r.a + 1.0) + (l.e + 1.0) * r.d,
            e: l.d * r.b + (l.e + 1.0) * (r.e + 1.0) - 1.0,
            f: l.d * r.c + (l.e + 1.0) * r.f + l.f,
        }
    }

    /// Returns the determinant of the linear part, `sx * sy - hx * hy`.
    #[inline]
    pub fn determinant(&self) -> f32 {
        (self.a + 1.0) * (self.e + 1.0) - self.b * self.d
    }

    /// Returns true if [`invert`](Self::invert) yields a true inverse rather
    /// than the singular fallback.
    pub fn is_invertible(&self) -> bool {
        self.is_translation_only() || !is_near_zero(self.determinant())
    }

    /// Returns the inverse transform.
    ///
    /// A linear part within [`INVERT_TOLERANCE`](crate::tolerance::INVERT_TOLERANCE)
    /// of the identity is inverted by negating the translation alone.
    ///
    /// If the determinant is below the same tolerance the transform is
    /// singular and the identity is returned. Use
    /// [`is_invertible`](Self::is_invertible) to tell the two apart.
    pub fn invert(self) -> Self {
        if self.is_translation_only() {
            log::trace!("inverting translation-only transform {}", self);
            return Self {
                c: -self.c,
                f: -self.f,
                ..Self::IDENTITY
            };
        }

        let (sx, hx, ox, hy, sy, oy) = self.elems();
        let det = sx * sy - hx * hy;
        if is_near_zero(det) {
            log::debug!("transform {} is singular (det = {}), returning identity", self, det);
            return Self::IDENTITY;
        }

        let (sx, sy) = (sy / det, sx / det);
        let (hx, hy) = (-hx / det, -hy / det);
        Self {
            a: sx - 1.0,
            b: hx,
            c: -sx * ox - hx * oy,
            d: hy,
            e: sy - 1.0,
            f: -hy * ox - sy * oy,
        }
    }

    /// Applies this transform to a point.
    ///
    /// For output matching the legacy y arithmetic, use
    /// [`transform_reference`](Self::transform_reference).
    #[inline]
    pub fn transform(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x * (self.a + 1.0) + p.y * self.b + self.c,
            p.x * self.d + p.y * (self.e + 1.0) + self.f,
        )
    }

    /// Applies this transform with the legacy y arithmetic.
    ///
    /// The y coordinate is computed as `y*hy + y*sy + oy`, using `p.y` where
    /// [`transform`](Self::transform) uses `p.x`. Kept for pipelines whose
    /// recorded output depends on that rounding; agrees with `transform`
    /// whenever `hy == 0`.
    #[inline]
    pub fn transform_reference(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x * (self.a + 1.0) + p.y * self.b + self.c,
            p.y * self.d + p.y * (self.e + 1.0) + self.f,
        )
    }

    /// Applies this transform to multiple points.
    pub fn transform_points(&self, points: &[Vec2]) -> Vec<Vec2> {
        points.iter().map(|p| self.transform(*p)).collect()
    }

    /// Returns the conventional elements `(sx, hx, ox, hy, sy, oy)`.
    #[inline]
    pub fn elems(&self) -> (f32, f32, f32, f32, f32, f32) {
        (self.a + 1.0, self.b, self.c, self.d, self.e + 1.0, self.f)
    }

    /// Splits into the linear part (translation zeroed) and the translation.
    ///
    /// `linear.offset(offset)` reproduces `self` exactly.
    #[inline]
    pub fn split(self) -> (Self, Vec2) {
        (
            Self {
                c: 0.0,
                f: 0.0,
                ..self
            },
            Vec2::new(self.c, self.f),
        )
    }

    fn is_translation_only(&self) -> bool {
        is_near_zero(self.a) && is_near_zero(self.b) && is_near_zero(self.d) && is_near_zero(self.e)
    }

    // Translate `origin` to zero, apply `op`, translate back.
    fn around(self, origin: Vec2, op: impl FnOnce(Self) -> Self) -> Self {
        if origin.is_zero() {
            return op(self);
        }
        op(self.offset(origin * -1.0)).offset(origin)
    }

    fn scale_about_zero(self, factor: Vec2) -> Self {
        Self {
            a: (self.a + 1.0) * factor.x - 1.0,
            b: self.b * factor.x,
            c: self.c * factor.x,
            d: self.d * factor.y,
            e: (self.e + 1.0) * factor.y - 1.0,
            f: self.f * factor.y,
        }
    }

    fn rotate_about_zero(self, radians: f32) -> Self {
        let (sin, cos) = f64::from(radians).sin_cos();
        let (s, c) = (sin as f32, cos as f32);
        Self {
            a: (self.a + 1.0) * c - self.d * s - 1.0,
            b: self.b * c - (self.e + 1.0) * s,
            c: self.c * c - self.f * s,
            d: (self.a + 1.0) * s + self.d * c,
            e: self.b * s + (self.e + 1.0) * c - 1.0,
            f: self.c * s + self.f * c,
        }
    }

    fn shear_about_zero(self, radians_x: f32, radians_y: f32) -> Self {
        let tx = f64::from(radians_x).tan() as f32;
        let ty = f64::from(radians_y).tan() as f32;
        Self {
            a: (self.a + 1.0) + self.d * tx - 1.0,
            b: self.b + (self.e + 1.0) * tx,
            c: self.c + self.f * tx,
            d: (self.a + 1.0) * ty + self.d,
            e: self.b * ty + (self.e + 1.0) - 1.0,
            f: self.c * ty + self.f,
        }
    }
}

impl Mul for Affine2 {
    type Output = Self;

    /// Multiplies two transforms (self * rhs).
    ///
    /// The result applies `rhs` first, then `self`.
    fn mul(self, rhs: Self) -> Self {
        self.compose(rhs)
    }
}

impl Mul<Vec2> for Affine2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform(rhs)
    }
}

impl fmt::Display for Affine2 {
    /// Formats as `[[sx hx ox] [hy sy oy]]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sx, hx, ox, hy, sy, oy) = self.elems();
        f.write_str("[[")?;
        for (i, row) in [[sx, hx, ox], [hy, sy, oy]].iter().enumerate() {
            if i > 0 {
                f.write_str("] [")?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write_general(f, *v)?;
            }
        }
        f.write_str("]]")
    }
}
