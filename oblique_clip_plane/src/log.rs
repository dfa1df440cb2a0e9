//! Internal logging system for the oblique clip plane crate
//!
//! This module provides a small logging facility with:
//! - Customizable logger via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default, filtered by a minimum severity
//! - A process-global logger slot guarded by an RwLock
//! - File and line information for ERROR logs

use colored::*;
use std::fmt;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route diagnostics into the host's own logging.
///
/// # Example
///
/// ```no_run
/// use oblique_clip_plane::oblique::log::{Logger, LogEntry};
///
/// struct HostLogger;
///
/// impl Logger for HostLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}: {}", entry.source, entry.message);
///     }
/// }
///
/// oblique_clip_plane::oblique::log::set_logger(HostLogger);
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);

    /// Whether entries of this severity are wanted at all.
    ///
    /// Checked before the message is formatted, so filtered-out entries
    /// cost no allocation.
    fn enabled(&self, _severity: LogSeverity) -> bool {
        true
    }
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "oblique::StereoUpdater")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame phase tracing
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Numerical edge cases (degenerate plane, singular projection)
    Warn,

    /// Errors returned to the caller
    Error,
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
///
/// Entries below `min_severity` are dropped. The per-frame updaters log at
/// Trace, so the default of Info keeps a running frame loop quiet.
#[derive(Debug, Clone, Copy)]
pub struct DefaultLogger {
    min_severity: LogSeverity,
}

impl DefaultLogger {
    pub fn new() -> Self {
        Self { min_severity: LogSeverity::Info }
    }

    /// Logger that prints everything at or above `min_severity`.
    pub fn with_min_severity(min_severity: LogSeverity) -> Self {
        Self { min_severity }
    }

    pub fn min_severity(&self) -> LogSeverity {
        self.min_severity
    }

    /// Format an entry without colors (used by tests and plain sinks).
    pub fn format_plain(entry: &LogEntry) -> String {
        format_line(entry, &severity_label(entry.severity), &entry.source)
    }

    fn format_colored(entry: &LogEntry) -> String {
        let label = severity_label(entry.severity);
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };
        format_line(entry, &severity, &entry.source.bright_blue())
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        if !self.enabled(entry.severity) {
            return;
        }
        println!("{}", Self::format_colored(entry));
    }

    fn enabled(&self, severity: LogSeverity) -> bool {
        severity >= self.min_severity
    }
}

fn severity_label(severity: LogSeverity) -> &'static str {
    match severity {
        LogSeverity::Trace => "TRACE",
        LogSeverity::Debug => "DEBUG",
        LogSeverity::Info => "INFO ",
        LogSeverity::Warn => "WARN ",
        LogSeverity::Error => "ERROR",
    }
}

/// `[timestamp] [SEVERITY] [source] message`, plus ` (file:line)` when known.
fn format_line(entry: &LogEntry, severity: &dyn fmt::Display, source: &dyn fmt::Display) -> String {
    // YYYY-MM-DD HH:MM:SS.mmm
    let datetime: DateTime<Local> = entry.timestamp.into();
    let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

    match (entry.file, entry.line) {
        (Some(file), Some(line)) => format!(
            "[{}] [{}] [{}] {} ({}:{})",
            timestamp, severity, source, entry.message, file, line
        ),
        _ => format!("[{}] [{}] [{}] {}", timestamp, severity, source, entry.message),
    }
}

// ===== GLOBAL LOGGER =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::new())))
}

/// Replace the global logger with a custom implementation
pub fn set_logger<L: Logger + 'static>(logger: L) {
    if let Ok(mut lock) = logger_slot().write() {
        *lock = Box::new(logger);
    }
}

/// Reset the global logger to `DefaultLogger::new()`
pub fn reset_logger() {
    if let Ok(mut lock) = logger_slot().write() {
        *lock = Box::new(DefaultLogger::new());
    }
}

/// Whether the installed logger wants entries of this severity.
///
/// The clip_* macros check this before formatting their message.
pub fn log_enabled(severity: LogSeverity) -> bool {
    match logger_slot().read() {
        Ok(lock) => lock.enabled(severity),
        Err(_) => false,
    }
}

/// Log a message without file:line information
///
/// Used by the clip_trace!, clip_debug!, clip_info! and clip_warn! macros.
pub fn log(severity: LogSeverity, source: &str, message: String) {
    if let Ok(lock) = logger_slot().read() {
        if !lock.enabled(severity) {
            return;
        }
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }
}

/// Log a message with file:line information
///
/// Used by the clip_error! macro.
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    if let Ok(lock) = logger_slot().read() {
        if !lock.enabled(severity) {
            return;
        }
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (per-frame phase tracing)
#[macro_export]
macro_rules! clip_trace {
    ($source:expr, $($arg:tt)*) => {
        if $crate::log::log_enabled($crate::log::LogSeverity::Trace) {
            $crate::log::log(
                $crate::log::LogSeverity::Trace,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! clip_debug {
    ($source:expr, $($arg:tt)*) => {
        if $crate::log::log_enabled($crate::log::LogSeverity::Debug) {
            $crate::log::log(
                $crate::log::LogSeverity::Debug,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! clip_info {
    ($source:expr, $($arg:tt)*) => {
        if $crate::log::log_enabled($crate::log::LogSeverity::Info) {
            $crate::log::log(
                $crate::log::LogSeverity::Info,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log a WARN message
///
/// # Example
///
/// ```no_run
/// oblique_clip_plane::clip_warn!("oblique::ObliqueMatrix", "dot(clip_plane, q) = {}", 0.0);
/// ```
#[macro_export]
macro_rules! clip_warn {
    ($source:expr, $($arg:tt)*) => {
        if $crate::log::log_enabled($crate::log::LogSeverity::Warn) {
            $crate::log::log(
                $crate::log::LogSeverity::Warn,
                $source,
                format!($($arg)*)
            )
        }
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! clip_error {
    ($source:expr, $($arg:tt)*) => {
        if $crate::log::log_enabled($crate::log::LogSeverity::Error) {
            $crate::log::log_detailed(
                $crate::log::LogSeverity::Error,
                $source,
                format!($($arg)*),
                file!(),
                line!()
            )
        }
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
