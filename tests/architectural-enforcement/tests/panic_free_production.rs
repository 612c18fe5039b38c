//! Integration Test: Panic-Free Production Code
//!
//! Errors propagate with `?`. Production code never unwraps.

use architectural_enforcement::{report, scan};

#[test]
fn test_no_unwrap_or_expect_in_production_code() {
    let mut violations = Vec::new();
    for dir in ["shine/core/src", "tui/src"] {
        violations.extend(scan(dir, |_, lines, idx| {
            let code = lines[idx].1;
            code.contains(".unwrap()") || code.contains(".expect(")
        }));
    }

    report("unwrap()/expect() outside tests", &violations);
}
