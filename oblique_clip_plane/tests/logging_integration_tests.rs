//! Integration tests for the logging system
//!
//! The logger is process-global, so every test here is serialized.
//!
//! Run with: cargo test --test logging_integration_tests

use oblique_clip_plane::glam::{Mat4, Quat, Vec3};
use oblique_clip_plane::oblique::log::{self, Logger, LogEntry, LogSeverity};
use oblique_clip_plane::oblique::{
    Camera, ClipPlane, FrameContext, ObliqueProjection, ObliqueProjectionConfig,
    SingularPolicy, Transform, compute_clip_plane, make_oblique,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Test logger that only wants entries at or above a severity
struct FilteredLogger {
    min_severity: LogSeverity,
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for FilteredLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }

    fn enabled(&self, severity: LogSeverity) -> bool {
        severity >= self.min_severity
    }
}

static FORMATTED: AtomicUsize = AtomicUsize::new(0);

fn counted(value: &str) -> &str {
    FORMATTED.fetch_add(1, Ordering::SeqCst);
    value
}

fn degenerate_transform() -> Transform {
    Transform {
        position: Vec3::new(0.0, 0.0, -3.0),
        rotation: Quat::from_xyzw(0.0, 0.0, 0.0, 0.0),
    }
}

fn create_camera() -> Camera {
    Camera::new(
        Mat4::IDENTITY,
        Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0),
    )
}

// ============================================================================
// LOGGER SLOT TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    log::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    log::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "test::module");
        assert_eq!(captured[1].message, "Test warning message");
    }

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_error_logging_with_location() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    log::log_detailed(
        LogSeverity::Error,
        "test::error",
        "Critical error occurred".to_string(),
        "test_file.rs",
        42,
    );

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].file, Some("test_file.rs"));
        assert_eq!(captured[0].line, Some(42));
    }

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    log::log(LogSeverity::Info, "test", "Message 1".to_string());
    log::reset_logger();
    log::log(LogSeverity::Info, "test", "Message 2".to_string());

    assert_eq!(entries.lock().unwrap().len(), 1);
}

#[test]
#[serial]
fn test_integration_filtered_entries_are_never_formatted() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(FilteredLogger { min_severity: LogSeverity::Warn, entries: entries.clone() });
    FORMATTED.store(0, Ordering::SeqCst);

    oblique_clip_plane::clip_trace!("test::filter", "{}", counted("trace"));
    oblique_clip_plane::clip_debug!("test::filter", "{}", counted("debug"));
    log::log(LogSeverity::Info, "test::filter", "info".to_string());
    assert_eq!(FORMATTED.load(Ordering::SeqCst), 0);
    assert!(entries.lock().unwrap().is_empty());

    oblique_clip_plane::clip_warn!("test::filter", "{}", counted("warn"));
    assert_eq!(FORMATTED.load(Ordering::SeqCst), 1);
    assert!(!log::log_enabled(LogSeverity::Trace));
    assert!(log::log_enabled(LogSeverity::Error));

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].message, "warn");
    }

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_frame_update_skips_filtered_traces() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(FilteredLogger { min_severity: LogSeverity::Info, entries: entries.clone() });

    let mut camera = create_camera();
    let mirror = Transform::from_position_forward(Vec3::new(0.0, 0.0, -5.0), Vec3::NEG_Z);
    ObliqueProjection::default()
        .update(&mut camera, &mirror, &FrameContext::new(3))
        .unwrap();

    assert!(entries.lock().unwrap().is_empty());

    log::reset_logger();
}

// ============================================================================
// DIAGNOSTICS FROM THE OBLIQUE PIPELINE
// ============================================================================

#[test]
#[serial]
fn test_integration_zero_denominator_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    let result = make_oblique(&Mat4::IDENTITY, &ClipPlane::new(Vec3::Z, -1.0));
    assert!(!result.is_finite());

    {
        let captured = entries.lock().unwrap();
        assert!(captured.iter().any(|e| {
            e.severity == LogSeverity::Warn
                && e.source == "oblique::ObliqueMatrix"
                && e.message.contains("dot(clip_plane, q)")
        }));
    }

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_well_conditioned_frame_logs_no_warnings() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    let mut camera = create_camera();
    let mirror = Transform::from_position_forward(Vec3::new(0.0, 0.0, -5.0), Vec3::NEG_Z);
    ObliqueProjection::default()
        .update(&mut camera, &mirror, &FrameContext::new(1))
        .unwrap();

    {
        let captured = entries.lock().unwrap();
        assert!(captured.iter().all(|e| e.severity < LogSeverity::Warn));
    }

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_stereo_phases_are_traced_in_order() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    let mut camera = create_camera();
    let mirror = Transform::from_position_forward(Vec3::new(0.0, 0.0, -5.0), Vec3::NEG_Z);
    ObliqueProjection::default()
        .update(&mut camera, &mirror, &FrameContext::new(9))
        .unwrap();

    {
        let captured = entries.lock().unwrap();
        let phases: Vec<&str> = captured
            .iter()
            .filter(|e| e.source == "oblique::StereoUpdater" && e.severity == LogSeverity::Trace)
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(phases, vec!["Reset", "Compute Left", "Compute Right", "Commit"]);

        assert!(captured
            .iter()
            .any(|e| e.source == "oblique::ObliqueProjection" && e.message.starts_with("Frame 9")));
    }

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_keep_base_failure_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    let config = ObliqueProjectionConfig {
        singular_policy: SingularPolicy::KeepBase,
        ..Default::default()
    };
    let mut camera = create_camera();
    let result = ObliqueProjection::new(config).update(&mut camera, &degenerate_transform(), &FrameContext::new(2));
    assert!(result.is_err());

    {
        let captured = entries.lock().unwrap();
        assert!(captured.iter().any(|e| e.source == "oblique::ClipPlane" && e.severity == LogSeverity::Warn));
        assert!(captured.iter().any(|e| e.source == "oblique::MonoscopicUpdater"));
        assert!(captured.iter().any(|e| e.source == "oblique::StereoUpdater" && e.severity == LogSeverity::Warn));
    }

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_normal_collapsed_by_view_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);

    // Non-zero world normal that the view flattens away
    let view = Mat4::from_scale(Vec3::new(1.0, 1.0, 0.0));
    let plane = compute_clip_plane(&view, Vec3::Z, Vec3::new(0.0, 0.0, -5.0));
    assert!(plane.is_degenerate());

    {
        let captured = entries.lock().unwrap();
        assert!(captured
            .iter()
            .any(|e| e.source == "oblique::ClipPlane" && e.severity == LogSeverity::Warn));
    }

    log::reset_logger();
}
