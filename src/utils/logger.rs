//! Leveled, colorized status lines
//!
//! Every function takes the output sink explicitly, so tests can capture the
//! output in a `Vec<u8>` without redirecting the process streams. By
//! convention callers pass stdout for [`info`] and [`success`] and stderr for
//! [`warning`] and [`error`].
//!
//! Each call writes exactly one line of the form `<marker>: <message>`.
//! Write failures are ignored: if the terminal is gone there is nobody left
//! to report them to.
//!
//! ```rust
//! use lxpkg_cli::utils::logger;
//!
//! let mut out = Vec::new();
//! logger::success(&mut out, "Command executed successfully");
//! assert!(String::from_utf8(out).unwrap().contains("Command executed successfully"));
//! ```
//!
//! Diagnostic output for developers goes through `tracing` instead.

use colored::{ColoredString, Colorize};
use std::fmt::Display;
use std::io::Write;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Neutral progress information
    Info,
    /// Something unexpected that did not stop the operation
    Warning,
    /// The operation failed
    Error,
    /// The operation completed
    Success,
}

impl Level {
    /// The colored marker printed before the message.
    pub fn marker(self) -> ColoredString {
        match self {
            Self::Info => "info".cyan().bold(),
            Self::Warning => "warning".yellow().bold(),
            Self::Error => "error".red().bold(),
            Self::Success => "success".green().bold(),
        }
    }
}

/// Write a single status line at `level`.
pub fn emit<W: Write + ?Sized>(sink: &mut W, level: Level, message: impl Display) {
    let _ = writeln!(sink, "{}: {}", level.marker(), message);
}

/// Informational line (cyan).
pub fn info<W: Write + ?Sized>(sink: &mut W, message: impl Display) {
    emit(sink, Level::Info, message);
}

/// Warning line (yellow).
pub fn warning<W: Write + ?Sized>(sink: &mut W, message: impl Display) {
    emit(sink, Level::Warning, message);
}

/// Error line (red).
pub fn error<W: Write + ?Sized>(sink: &mut W, message: impl Display) {
    emit(sink, Level::Error, message);
}

/// Success line (green).
pub fn success<W: Write + ?Sized>(sink: &mut W, message: impl Display) {
    emit(sink, Level::Success, message);
}
