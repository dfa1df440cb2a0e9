//! Camera: passive reference host camera.
//!
//! Stores the matrices a host rendering engine keeps per camera and
//! implements `HostCamera` on top of them. It computes nothing on its own:
//! the caller sets the view matrices and the engine-default projections, the
//! oblique updaters write the overrides.
//!
//! The stereo storage reproduces the coupling found in real XR camera
//! back ends: the two eye overrides live in one slot, so overriding one eye
//! on a camera without overrides leaves the other eye at identity.

use glam::Mat4;
use super::frustum::Frustum;
use super::host_camera::{HostCamera, StereoEye, StereoPair};

/// Low-level camera with mono and stereo matrix state.
#[derive(Debug, Clone)]
pub struct Camera {
    world_to_camera: Mat4,
    default_projection: Mat4,
    custom_projection: Option<Mat4>,
    stereo_views: StereoPair<Mat4>,
    stereo_default_projections: StereoPair<Mat4>,
    stereo_custom_projections: Option<StereoPair<Mat4>>,
}

impl Camera {
    /// Create a mono camera. Both stereo eyes start with the mono view and
    /// projection until `set_stereo_views` / `set_stereo_default_projections`
    /// are called.
    pub fn new(world_to_camera: Mat4, projection: Mat4) -> Self {
        Self {
            world_to_camera,
            default_projection: projection,
            custom_projection: None,
            stereo_views: StereoPair::splat(world_to_camera),
            stereo_default_projections: StereoPair::splat(projection),
            stereo_custom_projections: None,
        }
    }

    /// Create a camera with distinct per-eye views and projections.
    pub fn new_stereo(
        world_to_camera: Mat4,
        projection: Mat4,
        eye_views: StereoPair<Mat4>,
        eye_projections: StereoPair<Mat4>,
    ) -> Self {
        Self {
            stereo_views: eye_views,
            stereo_default_projections: eye_projections,
            ..Self::new(world_to_camera, projection)
        }
    }

    // ===== GETTERS =====

    /// Engine-computed mono projection (ignores any override).
    pub fn default_projection_matrix(&self) -> &Mat4 {
        &self.default_projection
    }

    /// Engine-computed projection of one eye (ignores any override).
    pub fn default_stereo_projection_matrix(&self, eye: StereoEye) -> &Mat4 {
        self.stereo_default_projections.get(eye)
    }

    /// Whether a mono projection override is active.
    pub fn has_custom_projection(&self) -> bool {
        self.custom_projection.is_some()
    }

    /// Whether stereo projection overrides are active.
    pub fn has_custom_stereo_projection(&self) -> bool {
        self.stereo_custom_projections.is_some()
    }

    /// Combined mono view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.world_to_camera
    }

    /// Combined view-projection matrix of one eye.
    pub fn eye_view_projection_matrix(&self, eye: StereoEye) -> Mat4 {
        self.stereo_projection_matrix(eye) * *self.stereo_views.get(eye)
    }

    /// World-space frustum of the mono camera.
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix())
    }

    /// World-space frustum of one eye.
    pub fn eye_frustum(&self, eye: StereoEye) -> Frustum {
        Frustum::from_view_projection(&self.eye_view_projection_matrix(eye))
    }

    // ===== SETTERS =====

    /// Set the mono world-to-camera matrix.
    pub fn set_view(&mut self, matrix: Mat4) {
        self.world_to_camera = matrix;
    }

    /// Set the engine-default mono projection.
    pub fn set_default_projection(&mut self, matrix: Mat4) {
        self.default_projection = matrix;
    }

    /// Set the per-eye view matrices.
    pub fn set_stereo_views(&mut self, views: StereoPair<Mat4>) {
        self.stereo_views = views;
    }

    /// Set the engine-default per-eye projections.
    pub fn set_stereo_default_projections(&mut self, projections: StereoPair<Mat4>) {
        self.stereo_default_projections = projections;
    }

    /// Override the projection of a single eye.
    ///
    /// If no stereo override is active yet, the other eye becomes identity
    /// until it is written too. `HostCamera` users go through
    /// `set_stereo_projection_matrices` instead.
    pub fn set_stereo_projection_matrix(&mut self, eye: StereoEye, matrix: Mat4) {
        let overrides = self
            .stereo_custom_projections
            .get_or_insert(StereoPair::splat(Mat4::IDENTITY));
        *overrides.get_mut(eye) = matrix;
    }
}

impl HostCamera for Camera {
    fn world_to_camera_matrix(&self) -> Mat4 {
        self.world_to_camera
    }

    fn projection_matrix(&self) -> Mat4 {
        self.custom_projection.unwrap_or(self.default_projection)
    }

    fn set_projection_matrix(&mut self, matrix: Mat4) {
        self.custom_projection = Some(matrix);
    }

    fn reset_projection_matrix(&mut self) {
        self.custom_projection = None;
    }

    fn stereo_view_matrix(&self, eye: StereoEye) -> Mat4 {
        *self.stereo_views.get(eye)
    }

    fn stereo_projection_matrix(&self, eye: StereoEye) -> Mat4 {
        match &self.stereo_custom_projections {
            Some(overrides) => *overrides.get(eye),
            None => *self.stereo_default_projections.get(eye),
        }
    }

    fn set_stereo_projection_matrices(&mut self, matrices: StereoPair<Mat4>) {
        self.stereo_custom_projections = Some(matrices);
    }

    fn reset_stereo_projection_matrices(&mut self) {
        self.stereo_custom_projections = None;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
