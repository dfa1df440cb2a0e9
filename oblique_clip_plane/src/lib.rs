/*!
# Oblique Clip Plane

Oblique near-plane projection matrices for planar mirrors, portals and water.

The near clipping plane of a perspective camera is tilted onto an arbitrary
scene plane so that nothing between the camera and the surface gets drawn
into the reflection or portal view. Works for mono cameras and for stereo
(XR) cameras, where both eyes are recomputed together every frame.

## Architecture

- **ClipPlane**: camera-space plane derived from a plane transform and a view matrix
- **make_oblique / make_oblique_simple**: rewrite a projection's third row
- **HostCamera**: capability trait the host engine's camera implements
- **MonoscopicUpdater / StereoUpdater**: per-frame updaters for one camera
- **ObliqueProjection**: per-frame orchestrator running both updaters

The crate never owns the host camera. Hosts implement `HostCamera` on their
camera type, or use the passive `Camera` provided here.
*/

// Internal modules
mod config;
mod error;
pub mod camera;
pub mod clip;
pub mod log;
pub mod projection;

// Main oblique namespace module
pub mod oblique {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::{ObliqueMethod, ObliqueProjectionConfig, SingularPolicy};

    // Host camera seam and reference camera
    pub use crate::camera::{Camera, Frustum, HostCamera, StereoEye, StereoPair, Transform};

    // Clip plane and oblique matrices
    pub use crate::clip::{
        ClipPlane, compute_clip_plane, compute_clip_plane_with_offset,
        make_oblique, make_oblique_simple, try_make_oblique, try_make_oblique_simple,
    };

    // Per-frame updates
    pub use crate::projection::{
        FrameContext, MonoscopicUpdater, ObliqueProjection, ProjectionUpdater, StereoUpdater,
        update_projection,
    };

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{
            DefaultLogger, LogEntry, LogSeverity, Logger,
            log, log_detailed, log_enabled, reset_logger, set_logger,
        };
    }
}

// Re-export math library at crate root
pub use glam;
