//! Oblique projection configuration

/// Which oblique near-plane derivation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObliqueMethod {
    /// Inverse-projection derivation (`make_oblique`). Works for any
    /// invertible projection matrix.
    Inverse,
    /// Closed-form derivation on matrix elements (`make_oblique_simple`).
    /// Inverse-free; assumes a standard perspective fourth row `(0, 0, -1, 0)`.
    ClosedForm,
}

/// What to do when the plane is degenerate or the projection is singular.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingularPolicy {
    /// Write whatever the math produced, non-finite values included.
    /// The next frame recomputes from the current pose.
    Propagate,
    /// Leave the engine default matrices in place for this frame and
    /// return the error.
    KeepBase,
}

/// Oblique projection configuration
#[derive(Debug, Clone)]
pub struct ObliqueProjectionConfig {
    /// Near-plane derivation
    pub method: ObliqueMethod,
    /// Distance the clip plane is pushed along its own normal before use
    pub clip_plane_offset: f32,
    /// Handling of degenerate planes and singular projections
    pub singular_policy: SingularPolicy,
}

impl Default for ObliqueProjectionConfig {
    fn default() -> Self {
        Self {
            method: ObliqueMethod::Inverse,
            clip_plane_offset: 0.0,
            singular_policy: SingularPolicy::Propagate,
        }
    }
}
