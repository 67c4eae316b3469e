//! Integration tests for `cyclefind sccs`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `cyclefind` binary.
fn cyclefind_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("cyclefind");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(name);
    path
}

// ---- exit code: success → 0 -------------------------------------------------

#[test]
fn sccs_triangle_counts_one_component() {
    let out = Command::new(cyclefind_bin())
        .args([
            "sccs",
            fixture("triangle.json").to_str().expect("path"),
            "--count",
        ])
        .output()
        .expect("run cyclefind sccs --count");
    assert!(
        out.status.success(),
        "expected exit 0; exit: {:?}",
        out.status.code()
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim(), "1");
}

/// `pair.json` has a reciprocal pair plus the isolated vertex `z`: one
/// non-trivial component, two in total.
#[test]
fn sccs_all_includes_trivial_components() {
    let out = Command::new(cyclefind_bin())
        .args([
            "sccs",
            fixture("pair.json").to_str().expect("path"),
            "--count",
        ])
        .output()
        .expect("run cyclefind sccs --count");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "1");

    let out = Command::new(cyclefind_bin())
        .args([
            "sccs",
            fixture("pair.json").to_str().expect("path"),
            "--all",
            "--count",
        ])
        .output()
        .expect("run cyclefind sccs --all --count");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "2");
}

/// Human output lists component members in stack pop order.
#[test]
fn sccs_human_output_lists_the_component() {
    let out = Command::new(cyclefind_bin())
        .args(["sccs", fixture("pair.json").to_str().expect("path")])
        .output()
        .expect("run cyclefind sccs");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("b, a"),
        "stdout should list the pair component; stdout: {stdout}"
    );
}

// ---- exit code: unreadable file → 2 -----------------------------------------

#[test]
fn sccs_nonexistent_file_exits_2() {
    let out = Command::new(cyclefind_bin())
        .args(["sccs", "/no/such/file/ever.json"])
        .output()
        .expect("run cyclefind sccs on nonexistent file");
    assert_eq!(
        out.status.code(),
        Some(2),
        "expected exit 2 for nonexistent file"
    );
}

// ---- exit code: invalid JSON → 2 --------------------------------------------

#[test]
fn sccs_invalid_file_exits_2() {
    let out = Command::new(cyclefind_bin())
        .args(["sccs", fixture("invalid.json").to_str().expect("path")])
        .output()
        .expect("run cyclefind sccs on invalid file");
    assert_eq!(
        out.status.code(),
        Some(2),
        "expected exit 2 for a file that is not graph JSON"
    );
}
