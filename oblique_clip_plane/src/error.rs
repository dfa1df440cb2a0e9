//! Error types for oblique clip plane computations
//!
//! The math in this crate runs once per rendered frame and never panics on
//! numerical input. Strict entry points report bad input through these
//! variants; lenient entry points log and propagate non-finite values instead.

use std::fmt;

/// Result type for oblique clip plane operations
pub type Result<T> = std::result::Result<T, Error>;

/// Oblique clip plane errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Clip plane normal has (near) zero length or is not finite
    DegeneratePlane(String),

    /// Projection matrix is not invertible, or the oblique scale factor
    /// `2 / dot(clip_plane, q)` is undefined
    SingularProjection(String),

    /// Host camera could not be accessed (e.g. poisoned lock)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegeneratePlane(msg) => write!(f, "Degenerate clip plane: {}", msg),
            Error::SingularProjection(msg) => write!(f, "Singular projection: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
