//! Fluent builder for invoking the lxpkg backend
//!
//! The builder collects the program and its arguments, then runs the program
//! to completion with stdout and stderr captured whole. Stdin is inherited,
//! so input piped into the front-end reaches the backend. Interactive
//! prompts are not supported: anything the backend prints while waiting for
//! an answer is only relayed after it exits.
//!
//! # Examples
//!
//! ```rust,no_run
//! use lxpkg_cli::backend::BackendCommand;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let result = BackendCommand::new("lxpkg")
//!     .args(["-s", "-b"])
//!     .with_context("Syncing repositories")
//!     .execute()
//!     .await?;
//! println!("backend exited with {}", result.status);
//! # Ok(())
//! # }
//! ```

use anyhow::Result;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use super::ProcessResult;
use crate::core::LxpkgError;
use crate::utils::platform::find_executable;

/// Builder for a single backend invocation.
///
/// Nothing is looked up or spawned until [`execute`](Self::execute) is
/// awaited.
#[derive(Debug, Clone)]
pub struct BackendCommand {
    /// Name or path of the executable, as given by the user
    program: String,

    /// Arguments in invocation order
    args: Vec<String>,

    /// Short description used in debug logs
    context: Option<String>,
}

impl BackendCommand {
    /// Starts a builder for `program`.
    ///
    /// `program` is either a bare name searched on `PATH` or a path
    /// containing a separator, checked relative to the working directory.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            context: None,
        }
    }

    /// Appends several arguments in order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Attaches a description shown in debug logs.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Locates the program, runs it to completion and captures its output.
    ///
    /// Exactly one child is spawned per call. There is no timeout: the call
    /// waits for as long as the backend runs.
    ///
    /// # Errors
    ///
    /// - [`LxpkgError::BinaryNotFound`] if the program cannot be located.
    ///   This is checked before any spawn attempt.
    /// - [`LxpkgError::SpawnFailed`] if the operating system refuses to
    ///   start it (for example, it is not executable).
    ///
    /// A child that exits non-zero is not an error; its status is in the
    /// returned [`ProcessResult`].
    pub async fn execute(self) -> Result<ProcessResult> {
        let Some(binary) = find_executable(&self.program) else {
            tracing::debug!(target: "backend", "Executable '{}' not found", self.program);
            return Err(LxpkgError::BinaryNotFound {
                binary: self.program,
            }
            .into());
        };

        let mut cmd = Command::new(&binary);
        cmd.args(&self.args);

        match &self.context {
            Some(ctx) => tracing::debug!(
                target: "backend",
                "({}) Executing command: {} {}",
                ctx,
                binary.display(),
                self.args.join(" ")
            ),
            None => tracing::debug!(
                target: "backend",
                "Executing command: {} {}",
                binary.display(),
                self.args.join(" ")
            ),
        }

        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let start = std::time::Instant::now();
        let output = match cmd.output().await {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Removed between lookup and spawn, or a broken interpreter line
                return Err(LxpkgError::BinaryNotFound {
                    binary: binary.display().to_string(),
                }
                .into());
            }
            Err(e) => {
                return Err(LxpkgError::SpawnFailed {
                    binary: binary.display().to_string(),
                    reason: e.to_string(),
                }
                .into());
            }
        };

        let status = exit_code(output.status);
        tracing::debug!(
            target: "backend",
            "Command finished with status {} in {:.2}s",
            status,
            start.elapsed().as_secs_f64()
        );

        Ok(ProcessResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status,
        })
    }
}

/// Maps a child's exit status to the status this process should exit with.
///
/// A normal exit keeps its code. On Unix, death by signal `N` becomes
/// `128 + N` as shells report it. Anything else is 1.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
