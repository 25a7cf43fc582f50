//! CLI smoke tests for the pagesieve binary.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_record(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("crawl.json");
    let markdown = vec!["chunking strategies for document processing"; 1500].join(" ");
    let record =
        format!(r#"{{"URLS": [], "tables": [["alpha", "beta"]], "markdown": ["{markdown}"]}}"#);
    std::fs::write(&path, record).expect("write record");
    path
}

fn pagesieve() -> Command {
    Command::cargo_bin("pagesieve").expect("binary builds")
}

#[test]
fn test_process_writes_output_file() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_record(&dir);
    let output = dir.path().join("out.json");

    pagesieve()
        .args([
            "process",
            input.to_str().expect("utf-8 path"),
            "--query",
            "chunking",
            "--output",
            output.to_str().expect("utf-8 path"),
            "--skip-urls",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged chunks"));

    let written = std::fs::read_to_string(&output).expect("output exists");
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&written).expect("valid json");
    assert!(!parsed.is_empty());
}

#[test]
fn test_process_json_format() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_record(&dir);
    let output = dir.path().join("out.json");

    let assert = pagesieve()
        .args([
            "--format",
            "json",
            "process",
            input.to_str().expect("utf-8 path"),
            "--query",
            "chunking",
            "--output",
            output.to_str().expect("utf-8 path"),
            "--skip-urls",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8");
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&stdout).expect("json stdout");
    for entry in &parsed {
        assert!(entry.get("chunk").is_some());
        assert!(entry.get("score").is_some());
    }
}

#[test]
fn test_context_prints_corpus() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_record(&dir);

    pagesieve()
        .args(["context", input.to_str().expect("utf-8 path"), "--skip-urls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"));
}

#[test]
fn test_chunk_command() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "Para one.\n\nPara two.").expect("write notes");

    pagesieve()
        .args([
            "chunk",
            path.to_str().expect("utf-8 path"),
            "--strategy",
            "regex",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chunks (regex): 2"));
}

#[test]
fn test_unknown_strategy_fails() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "text").expect("write notes");

    pagesieve()
        .args([
            "chunk",
            path.to_str().expect("utf-8 path"),
            "--strategy",
            "bogus",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown chunking strategy"));
}

#[test]
fn test_missing_input_still_succeeds_with_empty_output() {
    let dir = TempDir::new().expect("tempdir");
    let output = dir.path().join("out.json");

    pagesieve()
        .args([
            "process",
            "/definitely/not/here.json",
            "--output",
            output.to_str().expect("utf-8 path"),
            "--skip-urls",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No chunks"));
}
