//! Recording host camera for unit tests.
//!
//! Wraps a `Camera` and records every `HostCamera` call in order, so tests
//! can check which matrices the updaters read and when they write.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use glam::Mat4;
#[cfg(test)]
use super::camera::Camera;
#[cfg(test)]
use super::host_camera::{HostCamera, StereoEye, StereoPair};

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCall {
    WorldToCamera,
    Projection,
    SetProjection,
    ResetProjection,
    StereoView(StereoEye),
    StereoProjection(StereoEye),
    SetStereoProjections,
    ResetStereoProjections,
}

#[cfg(test)]
#[derive(Debug)]
pub struct RecordingCamera {
    pub inner: Camera,
    calls: RefCell<Vec<CameraCall>>,
}

#[cfg(test)]
impl RecordingCamera {
    pub fn new(inner: Camera) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<CameraCall> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls equal to `call`.
    pub fn count(&self, call: CameraCall) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }

    /// Position of the first recorded `call`, if any.
    pub fn position(&self, call: CameraCall) -> Option<usize> {
        self.calls.borrow().iter().position(|c| *c == call)
    }

    fn record(&self, call: CameraCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[cfg(test)]
impl HostCamera for RecordingCamera {
    fn world_to_camera_matrix(&self) -> Mat4 {
        self.record(CameraCall::WorldToCamera);
        self.inner.world_to_camera_matrix()
    }

    fn projection_matrix(&self) -> Mat4 {
        self.record(CameraCall::Projection);
        self.inner.projection_matrix()
    }

    fn set_projection_matrix(&mut self, matrix: Mat4) {
        self.record(CameraCall::SetProjection);
        self.inner.set_projection_matrix(matrix);
    }

    fn reset_projection_matrix(&mut self) {
        self.record(CameraCall::ResetProjection);
        self.inner.reset_projection_matrix();
    }

    fn stereo_view_matrix(&self, eye: StereoEye) -> Mat4 {
        self.record(CameraCall::StereoView(eye));
        self.inner.stereo_view_matrix(eye)
    }

    fn stereo_projection_matrix(&self, eye: StereoEye) -> Mat4 {
        self.record(CameraCall::StereoProjection(eye));
        self.inner.stereo_projection_matrix(eye)
    }

    fn set_stereo_projection_matrices(&mut self, matrices: StereoPair<Mat4>) {
        self.record(CameraCall::SetStereoProjections);
        self.inner.set_stereo_projection_matrices(matrices);
    }

    fn reset_stereo_projection_matrices(&mut self) {
        self.record(CameraCall::ResetStereoProjections);
        self.inner.reset_stereo_projection_matrices();
    }
}
