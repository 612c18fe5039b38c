//! Integration Test: Headless Core
//!
//! `shine-core` holds all state and behavior and must build without a
//! terminal. Rendering crates belong to the TUI only.

use std::fs;

use architectural_enforcement::{report, scan, workspace_root};

const TERMINAL_CRATES: [&str; 2] = ["ratatui", "crossterm"];

#[test]
fn test_core_manifest_has_no_terminal_crates() {
    let manifest = fs::read_to_string(workspace_root().join("shine/core/Cargo.toml"))
        .unwrap_or_default();
    assert!(!manifest.is_empty(), "shine/core/Cargo.toml missing");

    for krate in TERMINAL_CRATES {
        assert!(
            !manifest.lines().any(|l| l.trim_start().starts_with(krate)),
            "shine-core must not depend on {krate}"
        );
    }
}

#[test]
fn test_core_sources_never_touch_the_terminal() {
    let violations = scan("shine/core/src", |_, lines, idx| {
        let code = lines[idx].1;
        TERMINAL_CRATES.iter().any(|k| code.contains(&format!("{k}::")))
    });

    report("Terminal code inside shine-core", &violations);
}

#[test]
fn test_core_never_prints() {
    let violations = scan("shine/core/src", |_, lines, idx| {
        let code = lines[idx].1;
        code.contains("println!") || code.contains("eprintln!")
    });

    report("shine-core logs through tracing, never stdout", &violations);
}
