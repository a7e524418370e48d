use predicates::prelude::*;
use std::fs;

use crate::common::{TestProject, lxpkg_cmd};

#[test]
fn test_show_config_defaults() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("--show-config")
        .assert()
        .success()
        .stdout(
            "db_path=/var/db/lxpkg\n\
             repo_path=/usr/portage\n\
             repo_subdirs=core,wayland,extra,community\n\
             make_opts=-j$(nproc)\n\
             use_flags=gtk,qt\n\
             max_jobs=$(nproc)\n\
             repos=https://github.com/LearnixOS/repo\n\
             cache_dir=/var/cache/lxpkg\n",
        );
}

#[test]
fn test_backend_written_config_loads() {
    // The file lxpkg itself creates on first run
    let project = TestProject::with_config(
        "[General]\n\
         db_path=/var/db/lxpkg\n\
         repo_path=/var/cache/lxpkg/repo\n\
         repo_subdirs=core,wayland,extra,community\n\
         make_opts=-j$(nproc)\n\
         use_flags=gtk,wayland\n\
         max_jobs=$(nproc)\n\
         repos=https://github.com/LearnixOS/repo\n\
         cache_dir=/var/cache/lxpkg\n",
    );

    project
        .cmd()
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("repo_path=/var/cache/lxpkg/repo\n"))
        .stdout(predicate::str::contains("use_flags=gtk,wayland\n"))
        .stdout(predicate::str::contains("max_jobs=$(nproc)\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_show_config_merges_file_over_defaults() {
    let project = TestProject::with_config(
        r#"
; local overrides
[General]
max_jobs = 8
use_flags=wayland,pipewire
cache_dir = "/srv/cache"
"#,
    );

    project
        .cmd()
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_jobs=8\n"))
        .stdout(predicate::str::contains("use_flags=wayland,pipewire\n"))
        .stdout(predicate::str::contains("cache_dir=/srv/cache\n"))
        .stdout(predicate::str::contains("db_path=/var/db/lxpkg\n"));
}

#[test]
fn test_config_from_environment() {
    let project = TestProject::with_config("[General]\nrepo_path = \"/var/repo\"\n");

    lxpkg_cmd()
        .env("LXPKG_CONFIG", project.config_path())
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("repo_path=/var/repo\n"));
}

#[test]
fn test_missing_explicit_config_exits_1() {
    let project = TestProject::new();
    let absent = project.path().join("absent.conf");

    lxpkg_cmd()
        .arg("--config")
        .arg(&absent)
        .arg("-l")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: Configuration file not found"))
        .stderr(predicate::str::contains("--init-config"));
}

#[test]
fn test_malformed_config_exits_1() {
    let project = TestProject::with_config("[General\ndb_path = \n");

    project
        .cmd()
        .arg("-l")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: Invalid configuration file"));
}

#[test]
fn test_no_operation_with_malformed_config_prints_usage() {
    let project = TestProject::with_config("[General\ndb_path = \n");

    project
        .cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("error: No operation specified"));
}

#[test]
fn test_empty_value_warns_and_keeps_default() {
    let project = TestProject::with_config("[General]\ndb_path=\n");

    project
        .cmd()
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("db_path=/var/db/lxpkg\n"))
        .stderr(predicate::str::contains("db_path"));
}

#[test]
fn test_init_config_creates_file_once() {
    let project = TestProject::new();
    let target = project.path().join("etc").join("lxpkg.conf");

    lxpkg_cmd()
        .arg("--config")
        .arg(&target)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("success: Created configuration file"));

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("[General]\ndb_path=/var/db/lxpkg\n"));
    assert!(!written.contains('"'));

    fs::write(&target, "[General]\nmax_jobs=3\n").unwrap();
    lxpkg_cmd()
        .arg("--config")
        .arg(&target)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&target).unwrap(), "[General]\nmax_jobs=3\n");
}

#[test]
fn test_tilde_config_path_is_expanded() {
    let project = TestProject::with_config("[General]\nmake_opts=-j2\n");

    lxpkg_cmd()
        .env("HOME", project.path())
        .args(["--config", "~/lxpkg.conf", "--show-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("make_opts=-j2\n"));
}
