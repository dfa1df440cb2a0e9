//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_degenerate_plane_display() {
    let err = Error::DegeneratePlane("normal has zero length".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Degenerate clip plane"));
    assert!(display.contains("normal has zero length"));
}

#[test]
fn test_singular_projection_display() {
    let err = Error::SingularProjection("dot(clip_plane, q) is zero".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Singular projection"));
    assert!(display.contains("dot(clip_plane, q) is zero"));
}

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("Camera lock poisoned".to_string());
    assert_eq!(format!("{}", err), "Backend error: Camera lock poisoned");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::DegeneratePlane("test".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug1 = format!("{:?}", Error::DegeneratePlane("a".to_string()));
    assert!(debug1.contains("DegeneratePlane"));

    let debug2 = format!("{:?}", Error::SingularProjection("b".to_string()));
    assert!(debug2.contains("SingularProjection"));

    let debug3 = format!("{:?}", Error::BackendError("c".to_string()));
    assert!(debug3.contains("BackendError"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::SingularProjection("det = 0".to_string());
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_result_type_err() {
    fn returns_error() -> Result<f32> {
        Err(Error::DegeneratePlane("zero normal".to_string()))
    }

    match returns_error() {
        Err(Error::DegeneratePlane(msg)) => assert_eq!(msg, "zero normal"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_result_question_mark_propagation() {
    fn inner() -> Result<()> {
        Err(Error::BackendError("inner".to_string()))
    }

    fn outer() -> Result<u32> {
        inner()?;
        Ok(1)
    }

    assert!(matches!(outer(), Err(Error::BackendError(_))));
}
