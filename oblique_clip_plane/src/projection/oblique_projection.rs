//! ObliqueProjection: per-frame orchestrator.
//!
//! Runs the mono updater and then the stereo updater, unconditionally,
//! every frame. The host ignores whichever projection path is inactive for
//! the camera's current rendering mode.

use std::sync::Mutex;
use crate::camera::{HostCamera, Transform};
use crate::config::ObliqueProjectionConfig;
use crate::error::{Error, Result};
use super::updater::{MonoscopicUpdater, ProjectionUpdater, StereoUpdater};

/// Per-frame context handed in by the host's frame scheduler.
///
/// Carries no state across frames; the frame index only labels diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameContext {
    pub frame_index: u64,
}

impl FrameContext {
    pub fn new(frame_index: u64) -> Self {
        Self { frame_index }
    }
}

/// Keeps a camera's near plane on a scene plane (mirror, portal, water).
///
/// # Example
///
/// ```no_run
/// use oblique_clip_plane::glam::{Mat4, Vec3};
/// use oblique_clip_plane::oblique::{Camera, FrameContext, ObliqueProjection, Transform};
///
/// let mut camera = Camera::new(
///     Mat4::IDENTITY,
///     Mat4::perspective_rh_gl(1.0, 16.0 / 9.0, 0.1, 100.0),
/// );
/// let mirror = Transform::from_position_forward(Vec3::new(0.0, 0.0, -5.0), Vec3::NEG_Z);
///
/// let oblique = ObliqueProjection::default();
/// oblique.update(&mut camera, &mirror, &FrameContext::new(0))?;
/// # Ok::<(), oblique_clip_plane::oblique::Error>(())
/// ```
pub struct ObliqueProjection {
    config: ObliqueProjectionConfig,
    mono: MonoscopicUpdater,
    stereo: StereoUpdater,
}

impl ObliqueProjection {
    pub fn new(config: ObliqueProjectionConfig) -> Self {
        Self {
            mono: MonoscopicUpdater::new(config.clone()),
            stereo: StereoUpdater::new(config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &ObliqueProjectionConfig {
        &self.config
    }

    /// Update mono and stereo projections for this frame.
    ///
    /// Both paths always run. If either reports an error (only possible with
    /// `SingularPolicy::KeepBase`), the first one is returned after both ran.
    pub fn update(
        &self,
        camera: &mut dyn HostCamera,
        clip_plane_transform: &Transform,
        frame: &FrameContext,
    ) -> Result<()> {
        crate::clip_trace!(
            "oblique::ObliqueProjection",
            "Frame {}: plane at {:?}",
            frame.frame_index,
            clip_plane_transform.position
        );

        let mono = self.mono.update(camera, clip_plane_transform);
        let stereo = self.stereo.update(camera, clip_plane_transform);

        if let Err(e) = mono.as_ref().and(stereo.as_ref()) {
            crate::clip_debug!(
                "oblique::ObliqueProjection",
                "Frame {} kept default projection(s): {}",
                frame.frame_index,
                e
            );
        }

        mono.and(stereo)
    }

    /// `update` while holding the camera's lock for the whole frame update.
    ///
    /// For renderers that touch the camera from several threads: no other
    /// writer can interleave with the stereo reset/commit sequence.
    ///
    /// # Errors
    ///
    /// `Error::BackendError` if the lock is poisoned, otherwise as `update`.
    pub fn update_shared<C: HostCamera>(
        &self,
        camera: &Mutex<C>,
        clip_plane_transform: &Transform,
        frame: &FrameContext,
    ) -> Result<()> {
        let mut guard = camera.lock().map_err(|_| {
            crate::clip_error!("oblique::ObliqueProjection", "Camera lock poisoned");
            Error::BackendError("Camera lock poisoned".to_string())
        })?;

        self.update(&mut *guard, clip_plane_transform, frame)
    }
}

impl Default for ObliqueProjection {
    fn default() -> Self {
        Self::new(ObliqueProjectionConfig::default())
    }
}

/// Apply the clip plane to `camera` with the default configuration.
pub fn update_projection(camera: &mut dyn HostCamera, clip_plane_transform: &Transform) -> Result<()> {
    ObliqueProjection::default().update(camera, clip_plane_transform, &FrameContext::default())
}

#[cfg(test)]
#[path = "oblique_projection_tests.rs"]
mod tests;
