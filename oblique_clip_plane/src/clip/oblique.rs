//! Oblique near-plane projection matrices.
//!
//! Rewrites the third row of a perspective projection so its near clipping
//! plane coincides with an arbitrary camera-space plane (Lengyel's oblique
//! frustum technique). Used for mirrors and portals so geometry between the
//! camera and the surface is clipped away.
//!
//! Two derivations are provided:
//! - `make_oblique`: goes through the inverse projection. Any invertible
//!   projection works.
//! - `make_oblique_simple`: closed form on `m00, m11, m02, m12, m22, m23`.
//!   Inverse-free, and assumes the fourth row is `(0, 0, -1, 0)`.
//!
//! For a standard (symmetric or off-axis) perspective matrix both produce
//! the same third row up to float error.
//!
//! The scale factor `2 / dot(clip_plane, q)` is undefined when the plane
//! passes through the clip-space corner point `q`. The lenient functions log
//! and return the non-finite matrix; the `try_` functions return an error.

use glam::{Mat4, Vec4};
use crate::config::ObliqueMethod;
use crate::error::{Error, Result};
use super::clip_plane::ClipPlane;

/// Three-valued sign: 1, -1, or 0 for exactly zero.
fn sgn(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn with_third_row(projection: &Mat4, row: Vec4) -> Mat4 {
    let mut result = *projection;
    result.x_axis.z = row.x;
    result.y_axis.z = row.y;
    result.z_axis.z = row.z;
    result.w_axis.z = row.w;
    result
}

/// Clip-space corner nearest the plane: `(sgn x, sgn y, 1, 1)`.
fn near_corner(plane: Vec4) -> Vec4 {
    Vec4::new(sgn(plane.x), sgn(plane.y), 1.0, 1.0)
}

/// Inverse-based derivation. Returns the matrix and `dot(clip_plane, q)`.
fn oblique_inverse(projection: &Mat4, plane: Vec4) -> (Mat4, f32) {
    let q = projection.inverse() * near_corner(plane);
    let denominator = plane.dot(q);
    let c = plane * (2.0 / denominator);
    (with_third_row(projection, c - projection.row(3)), denominator)
}

/// Closed-form derivation. Returns the matrix and `dot(clip_plane, q)`.
fn oblique_closed_form(projection: &Mat4, plane: Vec4) -> (Mat4, f32) {
    let m00 = projection.x_axis.x;
    let m11 = projection.y_axis.y;
    let m02 = projection.z_axis.x;
    let m12 = projection.z_axis.y;
    let m22 = projection.z_axis.z;
    let m23 = projection.w_axis.z;

    let q = Vec4::new(
        (sgn(plane.x) + m02) / m00,
        (sgn(plane.y) + m12) / m11,
        -1.0,
        (1.0 + m22) / m23,
    );
    let denominator = plane.dot(q);
    let c = plane * (2.0 / denominator);
    (with_third_row(projection, Vec4::new(c.x, c.y, c.z + 1.0, c.w)), denominator)
}

fn warn_if_singular(denominator: f32, result: &Mat4) {
    if denominator == 0.0 || !denominator.is_finite() {
        crate::clip_warn!(
            "oblique::ObliqueMatrix",
            "dot(clip_plane, q) = {}, oblique projection is non-finite",
            denominator
        );
    } else if !result.is_finite() {
        crate::clip_warn!("oblique::ObliqueMatrix", "Oblique projection is non-finite");
    }
}

fn check_inputs(projection: &Mat4, plane: &ClipPlane) -> Result<()> {
    if plane.is_degenerate() {
        return Err(Error::DegeneratePlane(format!(
            "Clip plane {:?} has no usable normal",
            plane.as_vec4()
        )));
    }
    let det = projection.determinant();
    if det == 0.0 || !det.is_finite() {
        return Err(Error::SingularProjection(format!(
            "Projection matrix is not invertible (determinant {})",
            det
        )));
    }
    Ok(())
}

fn check_output(denominator: f32, result: Mat4) -> Result<Mat4> {
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(Error::SingularProjection(format!(
            "dot(clip_plane, q) = {}",
            denominator
        )));
    }
    if !result.is_finite() {
        return Err(Error::SingularProjection(
            "Oblique projection is non-finite".to_string(),
        ));
    }
    Ok(result)
}

/// Oblique version of `projection` whose near plane is `plane`.
///
/// `plane` is in camera space. Only the third row changes: it becomes
/// `c - row3` with `c = plane * 2 / dot(plane, inverse(projection) * corner)`.
/// Non-finite input or a zero scale denominator propagate into the result.
pub fn make_oblique(projection: &Mat4, plane: &ClipPlane) -> Mat4 {
    let (result, denominator) = oblique_inverse(projection, plane.as_vec4());
    warn_if_singular(denominator, &result);
    result
}

/// Inverse-free variant of `make_oblique` for standard perspective matrices.
pub fn make_oblique_simple(projection: &Mat4, plane: &ClipPlane) -> Mat4 {
    let (result, denominator) = oblique_closed_form(projection, plane.as_vec4());
    warn_if_singular(denominator, &result);
    result
}

/// Strict `make_oblique`: errors instead of producing non-finite values.
///
/// # Errors
///
/// - `Error::DegeneratePlane` if the plane normal is (near) zero or non-finite
/// - `Error::SingularProjection` if `projection` is not invertible, the scale
///   denominator is zero, or the result is non-finite
pub fn try_make_oblique(projection: &Mat4, plane: &ClipPlane) -> Result<Mat4> {
    check_inputs(projection, plane)?;
    let (result, denominator) = oblique_inverse(projection, plane.as_vec4());
    check_output(denominator, result)
}

/// Strict `make_oblique_simple`. Same errors as `try_make_oblique`.
pub fn try_make_oblique_simple(projection: &Mat4, plane: &ClipPlane) -> Result<Mat4> {
    check_inputs(projection, plane)?;
    let (result, denominator) = oblique_closed_form(projection, plane.as_vec4());
    check_output(denominator, result)
}

impl ObliqueMethod {
    /// Lenient oblique projection with this method.
    pub fn apply(self, projection: &Mat4, plane: &ClipPlane) -> Mat4 {
        match self {
            ObliqueMethod::Inverse => make_oblique(projection, plane),
            ObliqueMethod::ClosedForm => make_oblique_simple(projection, plane),
        }
    }

    /// Strict oblique projection with this method.
    pub fn try_apply(self, projection: &Mat4, plane: &ClipPlane) -> Result<Mat4> {
        match self {
            ObliqueMethod::Inverse => try_make_oblique(projection, plane),
            ObliqueMethod::ClosedForm => try_make_oblique_simple(projection, plane),
        }
    }
}

#[cfg(test)]
#[path = "oblique_tests.rs"]
mod tests;
