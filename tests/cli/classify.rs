//! Classify subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn test_classify_markers() {
    cargo_bin_cmd!("fancylists")
        .args(["classify", "i", "l", "9", "IV", "b."])
        .assert()
        .success()
        .stdout(concat!(
            "{\"marker\":\"i\",\"style\":\"lower-roman\",\"start\":1}\n",
            "{\"marker\":\"l\",\"style\":\"lower-roman\",\"start\":50}\n",
            "{\"marker\":\"9\",\"style\":\"decimal\",\"start\":9}\n",
            "{\"marker\":\"IV\",\"style\":\"upper-roman\",\"start\":4}\n",
            "{\"marker\":\"b\",\"style\":\"lower-latin\",\"start\":2}\n",
        ));
}

#[test]
fn test_classify_unclassifiable() {
    cargo_bin_cmd!("fancylists")
        .args(["classify", "Mr"])
        .assert()
        .success()
        .stdout("{\"marker\":\"Mr\",\"style\":null,\"start\":null}\n");
}

#[test]
fn test_classify_requires_marker() {
    cargo_bin_cmd!("fancylists")
        .arg("classify")
        .assert()
        .failure();
}
