//! Test utilities for lxpkg-cli
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration suite.
//!
//! - [`init_test_logging`] routes `tracing` output to the test harness
//! - [`FakeBackend`] writes a throwaway shell script that stands in for the
//!   real lxpkg binary (Unix only)

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[cfg(unix)]
pub use fake_backend::FakeBackend;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`. With neither, tests stay
/// silent.
///
/// ```rust,no_run
/// lxpkg_cli::test_utils::init_test_logging(Some(tracing::Level::DEBUG));
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

#[cfg(unix)]
mod fake_backend {
    use anyhow::{Context, Result};
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const CALLS_FILE: &str = "calls.log";

    /// An executable `/bin/sh` script in its own temporary directory.
    ///
    /// The directory, and the script with it, is removed on drop.
    pub struct FakeBackend {
        dir: TempDir,
        path: PathBuf,
    }

    impl FakeBackend {
        /// A backend running `body` as a shell script.
        pub fn script(body: &str) -> Result<Self> {
            let dir = tempfile::tempdir().context("Failed to create fake backend directory")?;
            let path = dir.path().join("lxpkg");

            fs::write(&path, format!("#!/bin/sh\n{body}"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .with_context(|| format!("Failed to chmod {}", path.display()))?;

            Ok(Self {
                dir,
                path,
            })
        }

        /// A backend that prints each argument on its own line and exits 0.
        pub fn echo_args() -> Result<Self> {
            Self::script("for arg in \"$@\"; do printf '%s\\n' \"$arg\"; done\n")
        }

        /// A backend that records its arguments, prints `stdout` and `stderr`
        /// and exits with `status`.
        ///
        /// The recorded arguments are available via [`calls`](Self::calls).
        /// `stdout` and `stderr` must not contain single quotes.
        pub fn recording(stdout: &str, stderr: &str, status: i32) -> Result<Self> {
            let body = format!(
                "calls=\"$(dirname \"$0\")/{CALLS_FILE}\"\n\
                 for arg in \"$@\"; do printf '%s\\n' \"$arg\" >> \"$calls\"; done\n\
                 printf '%s\\n' '---' >> \"$calls\"\n\
                 printf '%s' '{stdout}'\n\
                 printf '%s' '{stderr}' >&2\n\
                 exit {status}\n"
            );
            Self::script(&body)
        }

        /// Absolute path of the script.
        pub fn path(&self) -> &Path {
            &self.path
        }

        /// The script path as a string, suitable for `--binary`.
        pub fn program(&self) -> String {
            self.path.display().to_string()
        }

        /// Argument lists of every recorded invocation, oldest first.
        ///
        /// Empty if the script never ran or does not record.
        pub fn calls(&self) -> Vec<Vec<String>> {
            let Ok(log) = fs::read_to_string(self.dir.path().join(CALLS_FILE)) else {
                return Vec::new();
            };

            let mut calls = Vec::new();
            let mut current = Vec::new();
            for line in log.lines() {
                if line == "---" {
                    calls.push(std::mem::take(&mut current));
                } else {
                    current.push(line.to_string());
                }
            }
            calls
        }
    }

}
