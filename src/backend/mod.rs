//! Running the lxpkg backend and relaying what it said.
//!
//! [`BackendCommand`] spawns the backend and captures its output into a
//! [`ProcessResult`]. [`relay`] then writes that result back to the user:
//! stdout verbatim, stderr through the error logger, followed by a single
//! status line. The backend's status becomes the front-end's exit status.

pub mod command_builder;

pub use command_builder::{BackendCommand, exit_code};

use std::io::Write;

use crate::utils::logger;

/// Outcome of one backend invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessResult {
    /// Everything the child wrote to stdout
    pub stdout: String,
    /// Everything the child wrote to stderr
    pub stderr: String,
    /// Exit status, already mapped by [`exit_code`]
    pub status: i32,
}

impl ProcessResult {
    /// Whether the child exited with status 0.
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Relays a finished invocation to the user and returns its status.
///
/// `out` receives the child's stdout unchanged and the success line; `err`
/// receives the child's stderr and the failure line. With `quiet` set the
/// success line is omitted.
///
/// ```rust
/// use lxpkg_cli::backend::{relay, ProcessResult};
///
/// let result = ProcessResult { stdout: "firefox-128\n".into(), stderr: String::new(), status: 0 };
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// assert_eq!(relay(&result, &mut out, &mut err, false), 0);
/// assert!(String::from_utf8(out).unwrap().starts_with("firefox-128\n"));
/// ```
pub fn relay<O, E>(result: &ProcessResult, out: &mut O, err: &mut E, quiet: bool) -> i32
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    if !result.stdout.is_empty() {
        let _ = out.write_all(result.stdout.as_bytes());
        let _ = out.flush();
    }

    let stderr = result.stderr.trim_end();
    if !stderr.is_empty() {
        logger::error(err, stderr);
    }

    if result.success() {
        if !quiet {
            logger::success(out, "Command executed successfully");
        }
    } else {
        logger::error(err, format_args!("Command failed with status code {}", result.status));
    }

    result.status
}
