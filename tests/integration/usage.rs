use predicates::prelude::*;

use crate::common::{TestProject, lxpkg_cmd};

#[test]
fn test_help_lists_every_operation() {
    lxpkg_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--install"))
        .stdout(predicate::str::contains("--remove"))
        .stdout(predicate::str::contains("--sync"))
        .stdout(predicate::str::contains("--build"))
        .stdout(predicate::str::contains("--upgrade"))
        .stdout(predicate::str::contains("--clean"))
        .stdout(predicate::str::contains("--list"))
        .stdout(predicate::str::contains("--query"))
        .stdout(predicate::str::contains("--auto-resolve"));
}

#[test]
fn test_version() {
    lxpkg_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_operation_prints_usage_and_exits_1() {
    let project = TestProject::new();

    project
        .cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("error: No operation specified"))
        .stderr(predicate::str::contains("suggestion:"));
}

#[test]
fn test_empty_value_counts_as_no_operation() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["--install", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No operation specified"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    lxpkg_cmd().arg("--frobnicate").assert().code(2);
}

#[test]
fn test_missing_value_is_usage_error() {
    lxpkg_cmd().arg("-i").assert().code(2);
}

#[test]
fn test_verbose_and_quiet_conflict() {
    lxpkg_cmd()
        .args(["--verbose", "--quiet", "-l"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_missing_binary_exits_1() {
    let project = TestProject::new();
    let missing = project.path().join("bin").join("lxpkg");

    project
        .cmd()
        .arg("--binary")
        .arg(&missing)
        .arg("-s")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: lxpkg binary not found"))
        .stderr(predicate::str::contains("LXPKG_BINARY"));
}

#[test]
fn test_missing_bare_binary_name_exits_1() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["--binary", "lxpkg-definitely-not-installed-7f3a", "-l"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "lxpkg binary not found: lxpkg-definitely-not-installed-7f3a",
        ));
}
