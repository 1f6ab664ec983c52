//! End-to-end tests driving the `field-extract` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn field_extract(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_field-extract"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to spawn field-extract")
}

#[test]
fn test_explicit_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("in.json"),
        r#"[{"quote": "A"}, {"author": "B"}, {"quote": "C"}]"#,
    )
    .unwrap();

    let out = field_extract(dir.path(), &["--input", "in.json", "--output", "out.txt"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "A\nC\n");
    assert!(out.stdout.is_empty());
}

#[test]
fn test_default_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(
        dir.path().join("data/stoic-content.json"),
        r#"[{"quote": "one"}, {"quote": ""}, {"prompt": "p"}]"#,
    )
    .unwrap();

    let out = field_extract(dir.path(), &[]);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("quotes_list.txt")).unwrap(),
        "one\n\n"
    );
}

#[test]
fn test_empty_array_creates_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.json"), "[]").unwrap();

    let out = field_extract(dir.path(), &["-i", "in.json", "-o", "out.txt"]);
    assert!(out.status.success());
    assert_eq!(fs::read(dir.path().join("out.txt")).unwrap(), b"");
}

#[test]
fn test_missing_source_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();

    let out = field_extract(dir.path(), &["-i", "missing.json", "-o", "out.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("out.txt").exists());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn test_malformed_source_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.json"), "[{\"quote\": ").unwrap();

    let out = field_extract(dir.path(), &["-i", "in.json", "-o", "out.txt"]);
    assert!(!out.status.success());
    assert!(!dir.path().join("out.txt").exists());
    assert!(String::from_utf8_lossy(&out.stderr).contains("parse error"));
}

#[test]
fn test_stdout_and_custom_field() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("in.json"),
        r#"[{"author": "Seneca"}, {"quote": "q"}, {"author": "Zeno"}]"#,
    )
    .unwrap();

    let out = field_extract(dir.path(), &["-i", "in.json", "-o", "-", "-f", "author"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"Seneca\nZeno\n");
}

#[test]
fn test_verbose_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.json"), r#"[{"quote": "a"}, {}]"#).unwrap();

    let out = field_extract(dir.path(), &["-i", "in.json", "-o", "out.txt", "-v"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Processed 2 records -> 1 lines (1 skipped)"),
        "stderr: {stderr}"
    );
    assert_eq!(stderr.matches("in.json").count(), 1, "stderr: {stderr}");
    assert!(!stderr.contains("extraction complete"), "stderr: {stderr}");
}
