//! Floating-point geometric primitives and operations.

mod affine2;
mod format;
mod int_point;
mod vec2;

pub use affine2::Affine2;
pub use int_point::IntPoint;
pub use vec2::Vec2;
