//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT call sleep methods. Deferred work in
//! the core is a deadline polled once per frame; the terminal loop paces
//! itself with `tokio::time::interval`.
//! **Exceptions**: Test code

use architectural_enforcement::find_violations;

fn is_sleep_call(code: &str) -> bool {
    code.contains("::sleep(") || code.contains(".sleep(") || code.contains("sleep_until(")
}

/// Test that production code does not contain sleep() calls
#[test]
fn test_no_sleep_in_production_code() {
    let mut violations = find_violations("portfolio/core/src", is_sleep_call);
    violations.extend(find_violations("tui/src", is_sleep_call));

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Sleep calls found in production code!\n");

        for violation in &violations {
            eprintln!("  ❌ {}", violation);
        }

        eprintln!("\n✅ ACCEPTABLE alternatives:");
        eprintln!("  - DeferredTimer deadlines polled from update(now)");
        eprintln!("  - Frame pacing with tokio::time::interval()");
        eprintln!("  - Test code (#[cfg(test)] modules, tests/ directories)");

        panic!(
            "\nFound {} sleep violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}

#[test]
fn test_detector_matches_sleep_forms() {
    assert!(is_sleep_call("std::thread::sleep(d);"));
    assert!(is_sleep_call("tokio::time::sleep(d).await;"));
    assert!(is_sleep_call("tokio::time::sleep_until(deadline).await;"));
    assert!(!is_sleep_call("let asleep = true;"));
}
