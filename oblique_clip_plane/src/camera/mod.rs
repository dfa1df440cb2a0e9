//! Camera module: host camera seam, reference camera, transform, frustum.
//!
//! The host engine owns cameras and scene transforms. This module defines
//! the capability interface the oblique updaters drive (`HostCamera`) and a
//! passive `Camera` that implements it for hosts without their own.

mod camera;
mod frustum;
mod host_camera;
mod transform;
pub(crate) mod mock_camera;

pub use camera::Camera;
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use host_camera::{HostCamera, StereoEye, StereoPair};
pub use transform::Transform;
