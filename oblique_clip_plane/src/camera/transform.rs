//! Transform: world pose of a scene object (the clip plane, typically).

use glam::{Quat, Vec3};

/// World-space pose: position and rotation.
///
/// A plain value read from the host's scene graph each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Transform at `position` whose forward axis points along `forward`.
    ///
    /// `forward` does not need to be normalized. A zero `forward` yields an
    /// identity rotation.
    pub fn from_position_forward(position: Vec3, forward: Vec3) -> Self {
        let rotation = match forward.try_normalize() {
            Some(dir) => Quat::from_rotation_arc(Vec3::Z, dir),
            None => Quat::IDENTITY,
        };
        Self::new(position, rotation)
    }

    /// Forward axis (local +Z) in world space. This is the clip plane normal.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
