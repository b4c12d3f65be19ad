//! Error types for planar operations.

use thiserror::Error;

/// Errors that can occur during point and transform arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A scalar division was attempted with a divisor of exactly zero.
    #[error("division by zero")]
    DivideByZero,
}

/// Shorthand for results carrying a [`GeomError`].
pub type Result<T> = std::result::Result<T, GeomError>;
