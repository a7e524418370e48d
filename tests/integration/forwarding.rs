use lxpkg_cli::test_utils::FakeBackend;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_install_is_forwarded_with_both_tokens() {
    let project = TestProject::new();
    let backend = FakeBackend::recording("", "", 0).unwrap();

    project.cmd().arg("--binary").arg(backend.path()).args(["-i", "firefox"]).assert().success();

    assert_eq!(backend.calls(), vec![vec!["-i", "--install", "firefox"]]);
}

#[test]
fn test_forwarding_order_is_fixed() {
    let project = TestProject::new();
    let backend = FakeBackend::recording("", "", 0).unwrap();

    project
        .cmd()
        .arg("--binary")
        .arg(backend.path())
        .args(["-q", "vim", "--auto-resolve", "-i", "firefox", "-b", "-s"])
        .assert()
        .success();

    assert_eq!(
        backend.calls(),
        vec![vec![
            "-s",
            "-b",
            "--auto-resolve",
            "-i",
            "--install",
            "firefox",
            "-q",
            "--query",
            "vim",
        ]]
    );
}

#[test]
fn test_backend_runs_exactly_once() {
    let project = TestProject::new();
    let backend = FakeBackend::recording("", "", 0).unwrap();

    project
        .cmd()
        .arg("--binary")
        .arg(backend.path())
        .args(["-s", "-b", "-l", "-u", "world", "-c", "gcc", "-r", "nano"])
        .assert()
        .success();

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        vec![
            "-s",
            "-b",
            "-l",
            "-r",
            "--remove",
            "nano",
            "-u",
            "--upgrade",
            "world",
            "-c",
            "--clean",
            "gcc",
        ]
    );
}

#[test]
fn test_success_relays_stdout_and_reports() {
    let project = TestProject::new();
    let backend = FakeBackend::recording("firefox-128.0\nvim-9.1\n", "", 0).unwrap();

    project
        .cmd()
        .arg("--binary")
        .arg(backend.path())
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::str::contains("info: Executing command:"))
        .stdout(predicate::str::contains("firefox-128.0\nvim-9.1\n"))
        .stdout(predicate::str::contains("success: Command executed successfully"));
}

#[test]
fn test_failure_status_is_propagated() {
    let project = TestProject::new();
    let backend = FakeBackend::recording("", "file conflict in /usr/bin/vim", 5).unwrap();

    project
        .cmd()
        .arg("--binary")
        .arg(backend.path())
        .args(["-i", "vim"])
        .assert()
        .code(5)
        .stdout(predicate::str::contains("Command executed successfully").not())
        .stderr(predicate::str::contains("error: file conflict in /usr/bin/vim"))
        .stderr(predicate::str::contains("error: Command failed with status code 5"));
}

#[test]
fn test_status_one_from_backend() {
    let project = TestProject::new();
    let backend = FakeBackend::recording("", "", 1).unwrap();

    project
        .cmd()
        .arg("--binary")
        .arg(backend.path())
        .arg("-s")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Command failed with status code 1"));
}

#[test]
fn test_quiet_keeps_backend_output_only() {
    let project = TestProject::new();
    let backend = FakeBackend::recording("vim-9.1\n", "", 0).unwrap();

    project
        .cmd()
        .arg("--binary")
        .arg(backend.path())
        .args(["--quiet", "-q", "vim"])
        .assert()
        .success()
        .stdout("vim-9.1\n");
}

#[test]
fn test_binary_from_environment() {
    let project = TestProject::new();
    let backend = FakeBackend::recording("", "", 0).unwrap();

    project.cmd().env("LXPKG_BINARY", backend.path()).arg("-l").assert().success();

    assert_eq!(backend.calls(), vec![vec!["-l"]]);
}

#[test]
fn test_relative_binary_path() {
    let project = TestProject::new();
    let backend = FakeBackend::recording("", "", 0).unwrap();
    let local = project.path().join("lxpkg");
    std::fs::copy(backend.path(), &local).unwrap();

    // The copy records next to itself, inside the project directory
    project.cmd().args(["--binary", "./lxpkg", "-s"]).assert().success();

    let log = std::fs::read_to_string(project.path().join("calls.log")).unwrap();
    assert_eq!(log, "-s\n---\n");
}

#[test]
fn test_not_executable_binary_exits_1() {
    let project = TestProject::new();
    let script = project.path().join("lxpkg");
    std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();

    project
        .cmd()
        .arg("--binary")
        .arg(&script)
        .arg("-s")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to start"));
}
