use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_pom_version"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pom_version"))
        .stdout(predicate::str::contains("NEW_VERSION"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_pom_version"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    Command::new(env!("CARGO_BIN_EXE_pom_version"))
        .args(["--dry-run", "1.0"])
        .assert()
        .code(2);
}
