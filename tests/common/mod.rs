//! Shared helpers for the lxpkg-cli integration tests
//!
//! Every command built here runs with colors and progress indicators off and
//! with the lxpkg environment variables cleared, so the host's settings never
//! leak into a test.

// Not every helper is used by every test module
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding a configuration file.
pub struct TestProject {
    dir: TempDir,
    config_path: PathBuf,
}

impl TestProject {
    /// A project whose configuration file contains `content`.
    pub fn with_config(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = dir.path().join("lxpkg.conf");
        fs::write(&config_path, content).expect("Failed to write config");
        Self {
            dir,
            config_path,
        }
    }

    /// A project with an empty `[General]` section.
    pub fn new() -> Self {
        Self::with_config("[General]\n")
    }

    /// Path of the scratch directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// `lxpkg-cli --config <this project's file>` with a clean environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = lxpkg_cmd();
        cmd.arg("--config").arg(&self.config_path).current_dir(self.dir.path());
        cmd
    }
}

/// `lxpkg-cli` with colors and progress off and lxpkg variables removed.
pub fn lxpkg_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lxpkg-cli").expect("Failed to find lxpkg-cli binary");
    cmd.env("NO_COLOR", "1")
        .env("LXPKG_NO_PROGRESS", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("LXPKG_CONFIG")
        .env_remove("LXPKG_BINARY")
        .env_remove("RUST_LOG");
    cmd
}
