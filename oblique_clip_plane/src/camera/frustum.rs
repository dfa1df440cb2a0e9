//! Frustum: six clipping planes extracted from a view-projection matrix.
//!
//! Each plane is represented as a Vec4 (A, B, C, D) where:
//! - (A, B, C) is the inward-pointing unit normal
//! - D is the signed distance
//! - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes
//!
//! For an oblique projection the extracted near plane is the clip plane the
//! projection was built from, which makes the frustum a convenient check on
//! the oblique result.

use glam::{Mat4, Vec3, Vec4};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes.
///
/// Each plane is (A, B, C, D) where Ax + By + Cz + D = 0.
/// Normal (A, B, C) points inward (toward the visible volume).
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method for OpenGL clip space (z in [-1, 1]).
    /// Passing a projection matrix alone yields camera-space planes.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let r0 = vp.row(0);
        let r1 = vp.row(1);
        let r2 = vp.row(2);
        let r3 = vp.row(3);

        let mut planes = [
            r3 + r0, // left
            r3 - r0, // right
            r3 + r1, // bottom
            r3 - r1, // top
            r3 + r2, // near
            r3 - r2, // far
        ];

        // Normalize each plane so that (A, B, C) is a unit vector
        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Near plane (A, B, C, D).
    pub fn near_plane(&self) -> Vec4 {
        self.planes[PLANE_NEAR]
    }

    /// Far plane (A, B, C, D).
    pub fn far_plane(&self) -> Vec4 {
        self.planes[PLANE_FAR]
    }

    /// Test whether a point lies inside (or on the boundary of) all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let p = point.extend(1.0);
        self.planes.iter().all(|plane| plane.dot(p) >= 0.0)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
