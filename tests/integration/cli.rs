use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("mcci")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("detect"))
        .stdout(predicate::str::contains("profile"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("mcci")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_install_without_files_is_usage_error() {
    Command::cargo_bin("mcci")
        .unwrap()
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    Command::cargo_bin("mcci")
        .unwrap()
        .args(["-v", "-q", "detect", "a.jar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
