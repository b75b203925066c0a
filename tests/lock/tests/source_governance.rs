//! Source governance lock tests.
//!
//! Proves:
//! 1. No raw `LODESTAR::` digest domain literals outside `report.rs`
//! 2. No `deny_unknown_fields` in production source (instance files stay extensible)
//! 3. No `unwrap()` / `expect(` in production library source
//! 4. The engine crate never depends on the harness crate

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the workspace root from `CARGO_MANIFEST_DIR` of the lock-tests crate.
fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/, so workspace root is ../..
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn production_dirs() -> [PathBuf; 2] {
    let root = workspace_root();
    [root.join("search").join("src"), root.join("harness").join("src")]
}

fn rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return results;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            results.extend(rs_files(&path));
        } else if path.extension().is_some_and(|e| e == "rs") {
            results.push(path);
        }
    }
    results.sort();
    results
}

/// Non-comment lines outside `#[cfg(test)]` blocks that contain `pattern`.
///
/// `#[cfg(test)]` blocks are skipped via brace-depth tracking.
fn scan_file(path: &Path, pattern: &str, violations: &mut Vec<String>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };

    let mut brace_depth: usize = 0;
    let mut skip_depth: Option<usize> = None;
    let mut cfg_test_pending = false;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.contains("#[cfg(test)]") {
            cfg_test_pending = true;
            continue;
        }

        let opens = line.chars().filter(|&c| c == '{').count();
        let closes = line.chars().filter(|&c| c == '}').count();

        if cfg_test_pending && opens > 0 {
            skip_depth = Some(brace_depth);
            cfg_test_pending = false;
        }

        brace_depth = brace_depth.saturating_add(opens);
        brace_depth = brace_depth.saturating_sub(closes);

        if let Some(depth) = skip_depth {
            if brace_depth <= depth {
                skip_depth = None;
            }
            continue;
        }

        if trimmed.starts_with("//") {
            continue;
        }

        if trimmed.contains(pattern) {
            violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
        }
    }
}

fn scan_production(pattern: &str, skip_file: Option<&str>) -> Vec<String> {
    let mut violations = Vec::new();
    for dir in production_dirs() {
        for path in rs_files(&dir) {
            let name = path.file_name().and_then(|n| n.to_str());
            if skip_file.is_some() && name == skip_file {
                continue;
            }
            // Test-only support module.
            if name == Some("testkit.rs") {
                continue;
            }
            scan_file(&path, pattern, &mut violations);
        }
    }
    violations
}

fn report(violations: &[String], headline: &str) {
    if !violations.is_empty() {
        let mut msg = format!("{headline}:\n");
        for line in violations {
            let _ = writeln!(msg, "{line}");
        }
        panic!("{msg}");
    }
}

// ---------------------------------------------------------------------------
// 1. Digest domains live in one place
// ---------------------------------------------------------------------------

#[test]
fn no_raw_domain_literals_outside_report() {
    let violations = scan_production("b\"LODESTAR::", Some("report.rs"));
    report(&violations, "raw LODESTAR:: domain literals found outside report.rs");
}

// ---------------------------------------------------------------------------
// 2. No deny_unknown_fields
// ---------------------------------------------------------------------------

#[test]
fn no_deny_unknown_fields_in_production_code() {
    let violations = scan_production("deny_unknown_fields", None);
    report(&violations, "deny_unknown_fields found in production code");
}

// ---------------------------------------------------------------------------
// 3. Library code propagates errors
// ---------------------------------------------------------------------------

#[test]
fn no_unwrap_or_expect_in_production_code() {
    let mut violations = scan_production("unwrap()", None);
    violations.extend(scan_production(".expect(", None));
    report(&violations, "unwrap()/expect( found in production code");
}

// ---------------------------------------------------------------------------
// 4. Engine independence
// ---------------------------------------------------------------------------

#[test]
fn search_source_has_no_harness_references() {
    let mut violations = Vec::new();
    for path in rs_files(&workspace_root().join("search").join("src")) {
        scan_file(&path, "lodestar_harness", &mut violations);
    }
    report(&violations, "lodestar_harness referenced from the engine crate");
}

#[test]
fn search_cargo_toml_has_no_harness_dependency() {
    let cargo_toml = workspace_root().join("search").join("Cargo.toml");
    let content = fs::read_to_string(&cargo_toml).expect("search/Cargo.toml must exist");

    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        assert!(
            !trimmed.contains("lodestar-harness"),
            "search/Cargo.toml line {}: depends on the harness: {trimmed}",
            line_no + 1
        );
    }
}
