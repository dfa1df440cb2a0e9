use glam::{Quat, Vec3};
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_identity_forward_is_positive_z() {
    let t = Transform::default();
    assert_eq!(t.forward(), Vec3::Z);
    assert_eq!(t.right(), Vec3::X);
    assert_eq!(t.up(), Vec3::Y);
}

#[test]
fn test_from_position_forward_points_along_forward() {
    let forward = Vec3::new(1.0, 2.0, -3.0);
    let t = Transform::from_position_forward(Vec3::new(4.0, 5.0, 6.0), forward);

    assert_eq!(t.position, Vec3::new(4.0, 5.0, 6.0));
    assert!(t.forward().abs_diff_eq(forward.normalize(), 1e-5));
}

#[test]
fn test_from_position_forward_antiparallel_to_z() {
    let t = Transform::from_position_forward(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    assert!(t.forward().abs_diff_eq(Vec3::NEG_Z, 1e-5));
}

#[test]
fn test_from_position_forward_zero_direction() {
    let t = Transform::from_position_forward(Vec3::ONE, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
}

#[test]
fn test_axes_stay_orthonormal() {
    let t = Transform::from_position_forward(Vec3::ZERO, Vec3::new(0.3, -0.4, -1.0));

    assert!(t.forward().dot(t.right()).abs() < 1e-6);
    assert!(t.forward().dot(t.up()).abs() < 1e-6);
    assert!(t.right().cross(t.up()).abs_diff_eq(t.forward(), 1e-5));
}
