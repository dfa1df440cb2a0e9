//! Host camera capability interface.
//!
//! The rendering engine owns the real camera. This crate only needs the
//! handful of matrix reads and writes below, so hosts adapt their camera
//! type to `HostCamera` instead of this crate wrapping the engine.

use glam::Mat4;

/// One of the two stereo viewpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StereoEye {
    Left,
    Right,
}

impl StereoEye {
    /// Both eyes, in the order they are computed.
    pub const ALL: [StereoEye; 2] = [StereoEye::Left, StereoEye::Right];
}

/// One value per eye.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoPair<T> {
    pub left: T,
    pub right: T,
}

impl<T> StereoPair<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    pub fn get(&self, eye: StereoEye) -> &T {
        match eye {
            StereoEye::Left => &self.left,
            StereoEye::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, eye: StereoEye) -> &mut T {
        match eye {
            StereoEye::Left => &mut self.left,
            StereoEye::Right => &mut self.right,
        }
    }
}

impl<T: Copy> StereoPair<T> {
    /// Same value for both eyes.
    pub fn splat(value: T) -> Self {
        Self { left: value, right: value }
    }
}

/// Matrix capabilities a host camera exposes to the oblique projection updaters.
///
/// Matrices follow glam conventions: column-major, right-handed camera space
/// looking down -Z, OpenGL clip space.
///
/// Per-eye projection storage on stereo hosts is coupled: writing one eye
/// can clobber the other. Both eyes are written together through
/// `set_stereo_projection_matrices`.
pub trait HostCamera {
    /// World-to-camera (view) matrix of the mono camera.
    fn world_to_camera_matrix(&self) -> Mat4;

    /// Current mono projection matrix.
    fn projection_matrix(&self) -> Mat4;

    /// Override the mono projection matrix.
    fn set_projection_matrix(&mut self, matrix: Mat4);

    /// Drop any mono override and go back to the engine-computed projection.
    fn reset_projection_matrix(&mut self);

    /// View matrix of one stereo eye.
    fn stereo_view_matrix(&self, eye: StereoEye) -> Mat4;

    /// Current projection matrix of one stereo eye.
    fn stereo_projection_matrix(&self, eye: StereoEye) -> Mat4;

    /// Override both stereo projection matrices in one write.
    fn set_stereo_projection_matrices(&mut self, matrices: StereoPair<Mat4>);

    /// Drop any stereo overrides and go back to engine-computed projections
    /// for both eyes.
    fn reset_stereo_projection_matrices(&mut self);
}
