use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn temp_text_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn reports_quotation_violation_and_fails() {
    let file = temp_text_file("He said “Hello”now.\n");

    Command::cargo_bin("prosechk")
        .unwrap()
        .arg(file.path())
        .arg("--no-color")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "missing space after right quotation mark",
        ));
}

#[test]
fn clean_file_passes() {
    let file = temp_text_file("He said “Hello” to him.\n");

    Command::cargo_bin("prosechk")
        .unwrap()
        .arg(file.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("No proofreading issues found"));
}

#[test]
fn no_fail_flag_keeps_exit_code_zero() {
    let file = temp_text_file("He said “Hello”now.\n");

    Command::cargo_bin("prosechk")
        .unwrap()
        .arg(file.path())
        .arg("--no-color")
        .arg("--no-fail")
        .assert()
        .success();
}

#[test]
fn lowercase_sentence_start_is_reported() {
    let file = temp_text_file("this sentence starts lowercase.\n");

    Command::cargo_bin("prosechk")
        .unwrap()
        .arg(file.path())
        .arg("--no-color")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "sentence starts with a lowercase letter",
        ));
}

#[test]
fn ascii_quotes_flag_switches_glyphs() {
    let file = temp_text_file("She said \"hello to him.\n");

    // Typographic mode does not see the straight quote at all.
    Command::cargo_bin("prosechk")
        .unwrap()
        .arg(file.path())
        .arg("--no-color")
        .assert()
        .success();

    Command::cargo_bin("prosechk")
        .unwrap()
        .arg(file.path())
        .arg("--no-color")
        .arg("--ascii-quotes")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "left quotation mark is never closed",
        ));
}

#[test]
fn json_output_carries_violation_codes() {
    let file = temp_text_file("He said “Hello”now.\n");

    Command::cargo_bin("prosechk")
        .unwrap()
        .arg(file.path())
        .arg("--format")
        .arg("json")
        .arg("--no-fail")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"quote-right-space\""));
}

#[test]
fn missing_path_arguments_error() {
    Command::cargo_bin("prosechk")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files specified"));
}

#[test]
fn ignore_pattern_skips_matching_sentences() {
    let file = temp_text_file("TODO fix “this later.\n");

    Command::cargo_bin("prosechk")
        .unwrap()
        .arg(file.path())
        .arg("--no-color")
        .arg("--ignore-pattern")
        .arg("^TODO")
        .assert()
        .success();
}
