//! Integration test suite for lxpkg-cli
//!
//! These tests drive the compiled binary with `assert_cmd` against fake
//! backends written as shell scripts.
//!
//! # Running
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Organization
//!
//! - **usage**: help, usage errors and the empty request
//! - **forwarding**: argument translation, output relay and exit status
//! - **config_file**: `--config`, `--show-config` and `--init-config`

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod config_file;
#[cfg(unix)]
mod forwarding;
mod usage;
