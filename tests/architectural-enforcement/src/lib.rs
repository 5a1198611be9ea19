//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - No sleep() calls in production code
//! - A headless core with no terminal dependencies
//! - No ambient singletons in the core
//!
//! These tests are designed to catch violations early in the development cycle.
//! The helpers below find the workspace sources and strip comments and test
//! modules so only production code is checked.

use std::fs;
use std::path::{Path, PathBuf};

/// Root of the workspace (two levels above this package)
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

/// Every `.rs` file under `relative` (relative to the workspace root)
pub fn rust_sources(relative: &str) -> Vec<PathBuf> {
    let dir = workspace_root().join(relative);
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Production lines of a source file as `(line_number, code)`
///
/// Comments are stripped and scanning stops at the first `#[cfg(test)]`,
/// which by convention opens the test module at the end of a file.
pub fn production_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .map(|(idx, line)| (idx + 1, line.split("//").next().unwrap_or(line)))
        .filter(|(_, code)| !code.trim().is_empty())
        .collect()
}

/// Find production lines under `relative` matching `is_violation`
///
/// Returns `path:line - code` entries for reporting.
pub fn find_violations(relative: &str, is_violation: impl Fn(&str) -> bool) -> Vec<String> {
    let mut violations = Vec::new();
    for path in rust_sources(relative) {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (line_number, code) in production_lines(&content) {
            if is_violation(code) {
                violations.push(format!(
                    "{}:{} - {}",
                    path.display(),
                    line_number,
                    code.trim()
                ));
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_lines_skip_comments_and_tests() {
        let src = "fn a() {} // sleep(\n// only a comment\n#[cfg(test)]\nfn b() { sleep(); }\n";
        let lines = production_lines(src);
        assert_eq!(lines, vec![(1, "fn a() {} ")]);
    }

    #[test]
    fn test_workspace_sources_found() {
        assert!(!rust_sources("portfolio/core/src").is_empty());
        assert!(!rust_sources("tui/src").is_empty());
    }
}
