use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn termplot() -> Command {
    Command::cargo_bin("termplot").unwrap()
}

#[test]
fn help_lists_the_options() {
    termplot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--print"))
        .stdout(predicate::str::contains("--style"));
}

#[test]
fn demo_renders_axes() {
    termplot()
        .args(["--print", "60x20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  |"))
        .stdout(predicate::str::contains(" 0.00"));
}

#[test]
fn data_file_is_auto_fitted() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x, y\n0, 0\n1, 1\n2, 4\n3, 9").unwrap();

    termplot()
        .arg(file.path())
        .args(["--print", "40x12"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 9.00-"))
        .stdout(predicate::str::contains(" 0.00"));
}

#[test]
fn explicit_bounds_drive_the_labels() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "0 0\n1 1").unwrap();

    termplot()
        .arg(file.path())
        .args(["--ymin", "-5", "--ymax", "5", "--print", "40x13"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 5.00-"))
        .stdout(predicate::str::contains("-5.00-"));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    termplot()
        .arg(dir.path().join("missing.csv"))
        .args(["--print", "40x12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn unknown_style_fails() {
    termplot()
        .args(["--style", "dots", "--print", "40x12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported style"));
}

#[test]
fn bad_size_fails() {
    termplot()
        .args(["--print", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid size"));
}

#[test]
fn ragged_file_reports_the_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "0 1\n1 2 3").unwrap();

    termplot()
        .arg(file.path())
        .args(["--print", "40x12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}
