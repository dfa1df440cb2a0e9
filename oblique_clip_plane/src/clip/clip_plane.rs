//! Camera-space clip plane.
//!
//! A plane `n·x + d = 0` stored as `(nx, ny, nz, d)`, derived fresh every
//! frame from the plane transform and the camera (or eye) view matrix.

use glam::{Mat4, Vec3, Vec4};

/// Normals shorter than this are treated as degenerate.
pub const DEGENERATE_NORMAL_EPSILON: f32 = 1e-6;

/// Plane equation `(nx, ny, nz, d)` with `n·x + d = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlane(Vec4);

impl ClipPlane {
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self(normal.extend(distance))
    }

    /// Plane through `point` with normal `normal` (normalized here).
    ///
    /// A zero normal yields NaN components.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize();
        Self::new(normal, -normal.dot(point))
    }

    pub fn normal(&self) -> Vec3 {
        self.0.truncate()
    }

    pub fn distance(&self) -> f32 {
        self.0.w
    }

    pub fn as_vec4(&self) -> Vec4 {
        self.0
    }

    /// Signed distance from `point` to the plane (positive on the normal side).
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.0.dot(point.extend(1.0))
    }

    /// Same plane pushed `delta` units along its normal.
    pub fn offset(&self, delta: f32) -> Self {
        Self::new(self.normal(), self.distance() - delta * self.normal().length())
    }

    pub fn is_degenerate(&self) -> bool {
        let len = self.normal().length();
        !len.is_finite() || len < DEGENERATE_NORMAL_EPSILON || !self.0.w.is_finite()
    }
}

impl From<ClipPlane> for Vec4 {
    fn from(plane: ClipPlane) -> Self {
        plane.0
    }
}

/// Camera-space clip plane from a world-space plane pose.
///
/// `normal_world` transforms as a direction (translation ignored),
/// `position_world` as a point. The result has a unit normal and
/// `d = -dot(normal_camera, position_camera)`.
///
/// A normal that is zero in world space, or collapsed to zero by `view`,
/// is logged and propagates as NaN.
pub fn compute_clip_plane(view: &Mat4, normal_world: Vec3, position_world: Vec3) -> ClipPlane {
    let normal = view.transform_vector3(normal_world);
    let position = view.transform_point3(position_world);

    if normal.length() < DEGENERATE_NORMAL_EPSILON || !normal.is_finite() {
        crate::clip_warn!(
            "oblique::ClipPlane",
            "Degenerate clip plane normal {:?} (world {:?}), result will be non-finite",
            normal,
            normal_world
        );
    }

    ClipPlane::from_normal_and_point(normal, position)
}

/// `compute_clip_plane` with the plane pushed `offset` units along its
/// camera-space normal.
pub fn compute_clip_plane_with_offset(
    view: &Mat4,
    normal_world: Vec3,
    position_world: Vec3,
    offset: f32,
) -> ClipPlane {
    compute_clip_plane(view, normal_world, position_world).offset(offset)
}

#[cfg(test)]
#[path = "clip_plane_tests.rs"]
mod tests;
