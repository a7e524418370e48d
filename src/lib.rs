//! lxpkg-cli - command-line front-end for the lxpkg package manager
//!
//! The front-end does no package management of its own. It reads the lxpkg
//! configuration, turns the operation flags it was given into the backend's
//! argument list, runs the backend, and relays the backend's output and exit
//! status through colorized status lines.
//!
//! # Flow
//!
//! ```text
//! argv -> cli::Cli -> cli::request::translate -> backend::BackendCommand
//!      -> lxpkg binary -> backend::ProcessResult -> backend::relay -> exit status
//! ```
//!
//! # Modules
//!
//! - [`cli`] - argument parsing, front-end options and the run loop
//! - [`config`] - the `[General]` configuration and its defaults
//! - [`backend`] - spawning the backend and relaying its output
//! - [`core`] - error types and user-facing error rendering
//! - [`utils`] - status line logger, progress indicators, path and executable lookup
//!
//! # Configuration
//!
//! ```ini
//! [General]
//! db_path=/var/db/lxpkg
//! repo_path=/usr/portage
//! repo_subdirs=core,wayland,extra,community
//! make_opts=-j$(nproc)
//! use_flags=gtk,qt
//! max_jobs=$(nproc)
//! repos=https://github.com/LearnixOS/repo
//! cache_dir=/var/cache/lxpkg
//! ```
//!
//! This is the INI file the lxpkg backend writes. Every key is optional.
//! `$(nproc)` is passed through for the backend to interpret.

pub mod backend;
pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
