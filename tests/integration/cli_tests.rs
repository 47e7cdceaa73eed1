//! Тесты исполняемого файла sqllex

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sqllex"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

fn write_script(dir: &TempDir, sql: &str) -> String {
    let path = dir.path().join("script.sql");
    std::fs::write(&path, sql).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_lex_json_without_comments() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "select @a -- c\nfrom #t");

    let output = run(dir.path(), &["lex", &path, "--format", "json", "--no-comments"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let values: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, vec!["SELECT", "@a", "FROM", "#t"]);
}

#[test]
fn test_split_command() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "select 1\ngo\n\nselect 2\n");

    let output = run(dir.path(), &["split", &path]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "select 1\nGO\nselect 2\n");
}

#[test]
fn test_locate_command() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "select\n  abc");

    let output = run(dir.path(), &["locate", &path, "--offset", "10"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("2:3 IDENTIFIER"), "{}", stdout);
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["tokenize", "does-not-exist.sql"]);
    assert!(!output.status.success());
}
