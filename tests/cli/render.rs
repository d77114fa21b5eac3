//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin() {
    cargo_bin_cmd!("fancylists")
        .arg("render")
        .write_stdin("c. first\nd. second\n")
        .assert()
        .success()
        .stdout("<ol start=\"100\" type=\"i\">\n<li>first</li>\n<li>second</li>\n</ol>\n");
}

#[test]
fn test_render_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("list.md");
    fs::write(&test_file, "5. five\n6. six\n").unwrap();

    cargo_bin_cmd!("fancylists")
        .args(["render", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<ol start=\"5\">"))
        .stdout(predicate::str::contains("type=").not());
}

#[test]
fn test_render_crlf_input() {
    cargo_bin_cmd!("fancylists")
        .arg("render")
        .write_stdin("A. one\r\nB. two\r\n")
        .assert()
        .success()
        .stdout("<ol type=\"A\">\n<li>one</li>\n<li>two</li>\n</ol>\n");
}

#[test]
fn test_render_uses_discovered_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("list.md");
    fs::write(&test_file, "i. nine\nj. ten\n").unwrap();
    fs::write(
        temp_dir.path().join("fancylists.toml"),
        "[extensions]\nroman_numerals = false\n",
    )
    .unwrap();

    cargo_bin_cmd!("fancylists")
        .args(["render", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<ol start=\"9\" type=\"a\">"));
}

#[test]
fn test_render_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&config_file, "tab_width = 2\n").unwrap();

    cargo_bin_cmd!("fancylists")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("1. outer\n  a. inner\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<ol type=\"a\">"));
}

#[test]
fn test_render_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "tab_width = \"four\"\n").unwrap();

    cargo_bin_cmd!("fancylists")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("1. x\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_render_missing_file() {
    cargo_bin_cmd!("fancylists")
        .args(["render", "does-not-exist.md"])
        .assert()
        .failure();
}

#[test]
fn test_render_deeply_nested_markers() {
    cargo_bin_cmd!("fancylists")
        .arg("render")
        .write_stdin(format!("{}x\n", "- ".repeat(5000)))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<ul>"));
}
