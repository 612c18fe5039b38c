//! Architectural Enforcement Helpers
//!
//! Shared scanning code for the workspace-wide policy tests under `tests/`.
//! Everything here works on plain source text: files are walked with
//! `walkdir`, and the trailing `#[cfg(test)]` module of each file is cut off
//! so policies only see production code.

use std::fs;
use std::path::{Path, PathBuf};

/// A single policy breach, printed as `path:line - code`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub line: usize,
    pub code: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} - {}", self.path.display(), self.line, self.code)
    }
}

/// Root of the cargo workspace this crate lives in
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// All `.rs` files below `dir` (relative to the workspace root)
pub fn rust_sources(dir: &str) -> Vec<PathBuf> {
    let path = workspace_root().join(dir);
    if !path.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Numbered lines of `content` up to its first `#[cfg(test)]`, with line
/// comments removed
pub fn production_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .map(|(idx, line)| (idx + 1, line.split("//").next().unwrap_or(line)))
        .filter(|(_, code)| !code.trim().is_empty())
        .collect()
}

/// Scan production code under `dir` and report every line `is_violation`
/// flags. The closure also gets the file path so callers can carve out
/// per-file exceptions.
pub fn scan<F>(dir: &str, mut is_violation: F) -> Vec<Violation>
where
    F: FnMut(&Path, &[(usize, &str)], usize) -> bool,
{
    let mut violations = Vec::new();
    for path in rust_sources(dir) {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        let lines = production_lines(&content);
        for idx in 0..lines.len() {
            if is_violation(&path, &lines, idx) {
                let (line, code) = lines[idx];
                violations.push(Violation {
                    path: path.clone(),
                    line,
                    code: code.trim().to_string(),
                });
            }
        }
    }
    violations
}

/// Panic with a readable report when `violations` is non-empty
pub fn report(policy: &str, violations: &[Violation]) {
    if violations.is_empty() {
        return;
    }
    eprintln!("\n❌ {policy}\n");
    for violation in violations {
        eprintln!("  ❌ {violation}");
    }
    panic!(
        "\nFound {} violation(s) of: {policy}",
        violations.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_lines_stop_at_test_module() {
        let src = "fn a() {}\n// note\nfn b() {} // trailing\n#[cfg(test)]\nmod tests {}\n";
        let lines = production_lines(src);
        assert_eq!(lines, vec![(1, "fn a() {}"), (3, "fn b() {} ")]);
    }

    #[test]
    fn test_workspace_root_holds_members() {
        let root = workspace_root();
        assert!(root.join("Cargo.toml").exists());
        assert!(root.join("shine/core").exists());
    }

    #[test]
    fn test_rust_sources_finds_core_lib() {
        let files = rust_sources("shine/core/src");
        assert!(files.iter().any(|p| p.ends_with("lib.rs")));
    }
}
