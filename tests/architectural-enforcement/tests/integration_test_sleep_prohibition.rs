//! Integration Test: Sleep Prohibition
//!
//! Production code waits on events, channels, and deadlines. It never sleeps
//! to poll. The one exception is frame pacing inside the TUI event loop.

use std::path::Path;

use architectural_enforcement::{report, scan};

fn is_sleep(code: &str) -> bool {
    code.contains("::sleep(") || code.contains(".sleep(")
}

/// Frame pacing lives in `tui/src/app.rs` under a "Frame" comment
fn is_frame_limiting(path: &Path, lines: &[(usize, &str)], idx: usize, raw: &str) -> bool {
    if !path.ends_with("tui/src/app.rs") {
        return false;
    }
    let (line, _) = lines[idx];
    raw.lines()
        .skip(line.saturating_sub(4))
        .take(4)
        .any(|l| l.contains("Frame"))
}

#[test]
fn test_no_sleep_in_production_code() {
    let mut violations = Vec::new();
    for dir in ["shine/core/src", "tui/src"] {
        violations.extend(scan(dir, |path, lines, idx| {
            let (_, code) = lines[idx];
            if !is_sleep(code) {
                return false;
            }
            let raw = std::fs::read_to_string(path).unwrap_or_default();
            !is_frame_limiting(path, lines, idx, &raw)
        }));
    }

    report(
        "Sleep calls in production code (wait on I/O or a deadline instead)",
        &violations,
    );
}

#[test]
fn test_no_blocking_thread_sleep_anywhere() {
    let mut violations = Vec::new();
    for dir in ["shine/core/src", "tui/src"] {
        violations.extend(scan(dir, |_, lines, idx| {
            lines[idx].1.contains("thread::sleep")
        }));
    }

    report("std::thread::sleep blocks the async runtime", &violations);
}
