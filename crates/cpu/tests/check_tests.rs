//! Integration tests for the probe-and-classify pass.
//!
//! Uses [`common::FixedSource`] so no real observation window elapses.

mod common;

use std::io;
use std::sync::{Arc, Mutex};

use common::{check_with, FixedSource};
use machine_status_core::alert::{Severity, State};
use tracing::Level;

/// In-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a plain-text subscriber capturing INFO and above.
fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    (value, buffer.contents())
}

// ---------------------------------------------------------------------------
// Test: severity follows the utilization tier
// ---------------------------------------------------------------------------

#[test]
fn boundary_readings_map_to_expected_severity() {
    let cases = [
        (49.99, Severity::Info),
        (50.0, Severity::Info),
        (64.999, Severity::Info),
        (65.0, Severity::Warning),
        (89.999, Severity::Warning),
        (90.0, Severity::Critical),
    ];

    for (percent, expected) in cases {
        let result = check_with(FixedSource::reading(percent)).run();
        assert_eq!(result.state(), State::Success, "percent = {percent}");
        assert_eq!(result.severity(), expected, "percent = {percent}");
    }
}

// ---------------------------------------------------------------------------
// Test: failure mapping
// ---------------------------------------------------------------------------

/// An unreadable CPU is reported as FAILURE/ERROR, but the message still
/// carries the usage that was measured.
#[test]
fn info_failure_reports_error_with_measured_usage() {
    let result = check_with(FixedSource::info_failure(10.0)).run();
    assert_eq!(result.state(), State::Failure);
    assert_eq!(result.severity(), Severity::Error);
    assert_eq!(result.message(), "Total CPU Usage: 10.00%");
}

/// Even a critical reading cannot escalate past ERROR when info failed.
#[test]
fn info_failure_overrides_critical_usage() {
    let result = check_with(FixedSource::info_failure(97.0)).run();
    assert_eq!(result.severity(), Severity::Error);
}

/// A failed usage read is swallowed: zero usage, still SUCCESS.
#[test]
fn usage_failure_reports_zero_and_success() {
    let result = check_with(FixedSource::usage_failure()).run();
    assert_eq!(result.state(), State::Success);
    assert_eq!(result.severity(), Severity::Info);
    assert_eq!(result.message(), "Total CPU Usage: 0.00%");
}

// ---------------------------------------------------------------------------
// Test: repeated runs
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_are_identical() {
    let check = check_with(FixedSource::reading(72.3456));
    let first = check.run();
    let second = check.run();
    assert_eq!(first, second);
    assert_eq!(first.message(), "Total CPU Usage: 72.35%");
}

/// Overlapping invocations share one check without interfering.
#[test]
fn concurrent_runs_share_one_check() {
    let check = std::sync::Arc::new(check_with(FixedSource::reading(80.0)));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let check = std::sync::Arc::clone(&check);
            std::thread::spawn(move || check.run())
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("check thread should not panic");
        assert_eq!(result.severity(), Severity::Warning);
    }
}

// ---------------------------------------------------------------------------
// Test: logging side channel
// ---------------------------------------------------------------------------

/// An info failure logs an error event and the result still gets its info
/// event; neither changes what the check returns.
#[test]
fn info_failure_logs_error_and_result_events() {
    let check = check_with(FixedSource::info_failure(10.0));
    let (result, logs) = capture_logs(|| check.run());

    assert_eq!(result, check_with(FixedSource::info_failure(10.0)).run());
    assert_eq!(result.state(), State::Failure);
    assert_eq!(result.severity(), Severity::Error);

    let error_line = logs
        .lines()
        .find(|line| line.contains("Getting CPU info has failed."))
        .unwrap_or_else(|| panic!("missing CPU info failure event in:\n{logs}"));
    assert!(error_line.contains("ERROR"), "got: {error_line}");
    assert!(error_line.contains("GetMachineCPUUsage"), "got: {error_line}");

    let info_line = logs
        .lines()
        .find(|line| line.contains("Total CPU Usage: 10.00%"))
        .unwrap_or_else(|| panic!("missing result event in:\n{logs}"));
    assert!(info_line.contains("INFO"), "got: {info_line}");
    assert!(info_line.contains("GetMachineCPUUsage"), "got: {info_line}");
}

/// A successful pass logs only the result event.
#[test]
fn successful_pass_logs_result_without_error() {
    let check = check_with(FixedSource::reading(72.3456));
    let (result, logs) = capture_logs(|| check.run());

    assert_eq!(result.severity(), Severity::Warning);
    assert!(logs.contains("Total CPU Usage: 72.35%"), "got: {logs}");
    assert!(!logs.contains("Getting CPU info has failed."), "got: {logs}");
}
