//! Integration tests for the `rison` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the encode,
//! escape and stats subcommands through the actual binary, including
//! stdin/stdout piping, file I/O and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

/// Helper: unique temp path for file-output tests.
fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("rison-cli-test-{}-{}", std::process::id(), name))
}

// ─────────────────────────────────────────────────────────────────────────────
// Encode subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn encode_stdin_to_stdout() {
    Command::cargo_bin("rison")
        .unwrap()
        .arg("encode")
        .write_stdin(r#"{"b":1,"a":"x y"}"#)
        .assert()
        .success()
        .stdout("(a:'x y',b:1)");
}

#[test]
fn encode_file_to_stdout() {
    Command::cargo_bin("rison")
        .unwrap()
        .args(["encode", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("(active:!t,city:Portland,name:'Alice Smith',scores:!(95,87,92))");
}

#[test]
fn encode_uri_flag_escapes_document() {
    Command::cargo_bin("rison")
        .unwrap()
        .args(["encode", "--uri", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("(active:!t,city:Portland,name:'Alice%20Smith',scores:!(95,87,92))");
}

#[test]
fn encode_escape_leaves_flag() {
    Command::cargo_bin("rison")
        .unwrap()
        .args(["encode", "--escape-leaves"])
        .write_stdin(r#"{"path":"a\\b"}"#)
        .assert()
        .success()
        .stdout("(path:'a%5C%5Cb')");
}

#[test]
fn encode_uri_and_escape_leaves_conflict() {
    Command::cargo_bin("rison")
        .unwrap()
        .args(["encode", "--uri", "--escape-leaves"])
        .write_stdin("{}")
        .assert()
        .failure();
}

#[test]
fn encode_file_to_file() {
    let output_path = temp_path("encode.rison");
    let _ = std::fs::remove_file(&output_path);

    Command::cargo_bin("rison")
        .unwrap()
        .args(["encode", "-i", sample_json_path(), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert!(content.contains("name:'Alice Smith'"));

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn encode_invalid_json_fails() {
    Command::cargo_bin("rison")
        .unwrap()
        .arg("encode")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse input JSON"));
}

#[test]
fn encode_missing_file_fails() {
    Command::cargo_bin("rison")
        .unwrap()
        .args(["encode", "-i", "/nonexistent/rison/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn encode_verbose_logs_to_stderr_only() {
    Command::cargo_bin("rison")
        .unwrap()
        .args(["-vv", "encode"])
        .write_stdin("[1,2]")
        .assert()
        .success()
        .stdout("!(1,2)")
        .stderr(predicate::str::contains("Encoding"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Escape subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn escape_argument() {
    Command::cargo_bin("rison")
        .unwrap()
        .args(["escape", "(q:'a b')"])
        .assert()
        .success()
        .stdout("(q:'a%20b')");
}

#[test]
fn escape_stdin_strips_trailing_newline() {
    Command::cargo_bin("rison")
        .unwrap()
        .arg("escape")
        .write_stdin("caf\u{00e9} au lait\n")
        .assert()
        .success()
        .stdout("caf%C3%A9%20au%20lait");
}

// ─────────────────────────────────────────────────────────────────────────────
// Stats subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stats_from_file() {
    Command::cargo_bin("rison")
        .unwrap()
        .args(["stats", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON URI size:"))
        .stdout(predicate::str::contains("RISON URI size:"))
        .stdout(predicate::str::contains("Reduction:"));
}

#[test]
fn stats_invalid_json_fails() {
    Command::cargo_bin("rison")
        .unwrap()
        .arg("stats")
        .write_stdin("{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse input JSON"));
}

#[test]
fn no_subcommand_shows_usage() {
    Command::cargo_bin("rison")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
