//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("fancylists")
        .arg("parse")
        .write_stdin("Intro.\n\nIV. four\nV. five\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DOCUMENT"))
        .stdout(predicate::str::contains("PARAGRAPH"))
        .stdout(predicate::str::contains("ORDERED_LIST"))
        .stdout(predicate::str::contains("LIST_START"))
        .stdout(predicate::str::contains("LIST_TYPE"));
}

#[test]
fn test_parse_decimal_list_has_no_style_token() {
    cargo_bin_cmd!("fancylists")
        .arg("parse")
        .write_stdin("1. one\n2. two\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("LIST_ITEM"))
        .stdout(predicate::str::contains("LIST_TYPE").not());
}
