//! Integration Test: Headless Core
//!
//! **Policy**: `portfolio-core` holds state only. It MUST NOT depend on a
//! terminal or UI crate, and it MUST NOT keep ambient global state: the
//! surface owns one `Portfolio` and passes it around explicitly.

use std::fs;

use architectural_enforcement::{find_violations, workspace_root};

const UI_CRATES: &[&str] = &["ratatui", "crossterm", "termion", "cursive"];

const SINGLETON_MARKERS: &[&str] = &[
    "static mut",
    "lazy_static!",
    "OnceLock",
    "OnceCell",
    "thread_local!",
];

#[test]
fn test_core_manifest_has_no_ui_crates() {
    let manifest = workspace_root().join("portfolio/core/Cargo.toml");
    let content = fs::read_to_string(&manifest).expect("core manifest");

    let offending: Vec<&str> = UI_CRATES
        .iter()
        .copied()
        .filter(|name| {
            content.lines().any(|line| {
                let line = line.trim_start();
                line.starts_with(&format!("{name} ")) || line.starts_with(&format!("{name}="))
            })
        })
        .collect();

    assert!(
        offending.is_empty(),
        "portfolio-core must stay headless, found: {offending:?}"
    );
}

#[test]
fn test_core_sources_have_no_ui_imports() {
    let violations = find_violations("portfolio/core/src", |code| {
        UI_CRATES
            .iter()
            .any(|name| code.contains(&format!("{name}::")))
    });

    assert!(
        violations.is_empty(),
        "UI imports in portfolio-core:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_core_has_no_global_state() {
    let violations = find_violations("portfolio/core/src", |code| {
        SINGLETON_MARKERS.iter().any(|marker| code.contains(marker))
    });

    assert!(
        violations.is_empty(),
        "Global state in portfolio-core:\n{}",
        violations.join("\n")
    );
}
