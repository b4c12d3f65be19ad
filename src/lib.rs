//! planar - 2D points and affine transforms
//!
//! Two small value types: [`Vec2`], a point/vector with the usual
//! arithmetic, and [`Affine2`], a 2x3 affine matrix that composes, inverts
//! and applies to points. The default [`Affine2`] is the identity.
//!
//! ```
//! use planar::{Affine2, Vec2};
//!
//! let t = Affine2::new(2.0, 0.0, 1.0, 0.0, 2.0, 1.0);
//! let p = t.transform(Vec2::new(1.0, 1.0));
//! assert_eq!(p, Vec2::new(3.0, 3.0));
//! assert_eq!(t.invert().transform(p), Vec2::new(1.0, 1.0));
//! assert_eq!(t.to_string(), "[[2 0 1] [0 2 1]]");
//! ```

pub mod error;
pub mod primitives;
pub mod tolerance;

pub use error::{GeomError, Result};
pub use primitives::{Affine2, IntPoint, Vec2};
pub use tolerance::INVERT_TOLERANCE;
