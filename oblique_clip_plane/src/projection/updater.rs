//! Projection updaters.
//!
//! A ProjectionUpdater rewrites a host camera's projection matrices so the
//! near plane follows a clip plane transform. Called once per frame after
//! transforms are final and before render submission. Stateless: every
//! call starts from the engine-default matrices.

use glam::Mat4;
use crate::camera::{HostCamera, StereoEye, StereoPair, Transform};
use crate::clip::compute_clip_plane_with_offset;
use crate::config::{ObliqueProjectionConfig, SingularPolicy};
use crate::error::Result;

/// Strategy for applying an oblique near plane to a host camera.
pub trait ProjectionUpdater: Send + Sync {
    /// Recompute and write the camera's oblique projection(s) for this frame.
    fn update(&self, camera: &mut dyn HostCamera, clip_plane_transform: &Transform) -> Result<()>;
}

/// Oblique projection for one view/projection pair, honoring the config.
fn oblique_projection(
    config: &ObliqueProjectionConfig,
    view: &Mat4,
    projection: &Mat4,
    clip_plane_transform: &Transform,
) -> Result<Mat4> {
    let plane = compute_clip_plane_with_offset(
        view,
        clip_plane_transform.forward(),
        clip_plane_transform.position,
        config.clip_plane_offset,
    );

    match config.singular_policy {
        SingularPolicy::Propagate => Ok(config.method.apply(projection, &plane)),
        SingularPolicy::KeepBase => config.method.try_apply(projection, &plane),
    }
}

/// Mono camera updater.
///
/// Resets the mono projection to the engine default, derives the clip plane
/// from the camera's world-to-camera matrix and writes the oblique matrix.
/// On a strict-mode failure the default projection stays in place.
pub struct MonoscopicUpdater {
    config: ObliqueProjectionConfig,
}

impl MonoscopicUpdater {
    pub fn new(config: ObliqueProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ObliqueProjectionConfig {
        &self.config
    }
}

impl ProjectionUpdater for MonoscopicUpdater {
    fn update(&self, camera: &mut dyn HostCamera, clip_plane_transform: &Transform) -> Result<()> {
        camera.reset_projection_matrix();

        let view = camera.world_to_camera_matrix();
        let base = camera.projection_matrix();

        let oblique = oblique_projection(&self.config, &view, &base, clip_plane_transform)
            .map_err(|e| {
                crate::clip_warn!("oblique::MonoscopicUpdater", "Keeping default projection: {}", e);
                e
            })?;

        camera.set_projection_matrix(oblique);
        Ok(())
    }
}

/// Stereo camera updater.
///
/// Runs Reset → ComputeLeft → ComputeRight → Commit. Per-eye projection
/// storage on the host is coupled, so both eyes are reset together, computed
/// into a local pair from their own view and default projection, then
/// written with a single call. Either both eyes get an oblique matrix or
/// neither does.
pub struct StereoUpdater {
    config: ObliqueProjectionConfig,
}

impl StereoUpdater {
    pub fn new(config: ObliqueProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ObliqueProjectionConfig {
        &self.config
    }

    /// Oblique projection of one eye. Only valid right after the reset.
    fn compute_eye(
        &self,
        camera: &dyn HostCamera,
        eye: StereoEye,
        clip_plane_transform: &Transform,
    ) -> Result<Mat4> {
        let view = camera.stereo_view_matrix(eye);
        let base = camera.stereo_projection_matrix(eye);
        oblique_projection(&self.config, &view, &base, clip_plane_transform)
    }
}

impl ProjectionUpdater for StereoUpdater {
    fn update(&self, camera: &mut dyn HostCamera, clip_plane_transform: &Transform) -> Result<()> {
        crate::clip_trace!("oblique::StereoUpdater", "Reset");
        camera.reset_stereo_projection_matrices();

        let mut pair = StereoPair::splat(Mat4::IDENTITY);
        for eye in StereoEye::ALL {
            crate::clip_trace!("oblique::StereoUpdater", "Compute {:?}", eye);
            *pair.get_mut(eye) = self
                .compute_eye(camera, eye, clip_plane_transform)
                .map_err(|e| {
                    crate::clip_warn!(
                        "oblique::StereoUpdater",
                        "Keeping default projections for both eyes ({:?} failed): {}",
                        eye,
                        e
                    );
                    e
                })?;
        }

        crate::clip_trace!("oblique::StereoUpdater", "Commit");
        camera.set_stereo_projection_matrices(pair);
        Ok(())
    }
}

#[cfg(test)]
#[path = "updater_tests.rs"]
mod tests;
