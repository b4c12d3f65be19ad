//! 2D point/vector type for coordinates and offsets.

use super::format::write_fixed;
use super::IntPoint;
use crate::error::{self, GeomError};
use num_traits::Zero;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D coordinate pair.
///
/// Serves both as a position and as an offset; transforms take it as a
/// translation, a scale factor or an origin. All operations return new
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Divides both components by `s`.
    ///
    /// Fails only when `s` is exactly zero. Tiny divisors are accepted and
    /// may overflow to infinity.
    #[inline]
    pub fn checked_div(self, s: f32) -> error::Result<Self> {
        if s == 0.0 {
            return Err(GeomError::DivideByZero);
        }
        Ok(Self {
            x: self.x / s,
            y: self.y / s,
        })
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D pseudo-cross product (determinant).
    ///
    /// Equals the signed area of the parallelogram spanned by the two
    /// vectors. Positive means `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rounds each coordinate to the nearest integer, halves away from zero.
    #[inline]
    pub fn round(self) -> IntPoint {
        IntPoint::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl Zero for Vec2 {
    #[inline]
    fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Exact comparison; `-0.0` counts as zero.
    #[inline]
    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_fixed(f, self.x, 6)?;
        f.write_str(", ")?;
        write_fixed(f, self.y, 6)?;
        f.write_str(")")
    }
}
