//! Error handling for lxpkg-cli
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** so callers can match on the precise failure
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`LxpkgError`] - every failure the front-end itself can produce
//! - [`ErrorContext`] - wraps an error with details and a suggestion for display
//!
//! A backend that exits non-zero is *not* represented here. Its status is
//! relayed verbatim as the front-end's own exit status.
//!
//! # Examples
//!
//! ```rust,no_run
//! use lxpkg_cli::core::{LxpkgError, user_friendly_error};
//!
//! let error = anyhow::Error::from(LxpkgError::BinaryNotFound {
//!     binary: "lxpkg".to_string(),
//! });
//! user_friendly_error(error).display(); // colored error with a suggestion
//! ```

use std::fmt;
use thiserror::Error;

use crate::utils::logger;

/// The main error type for lxpkg-cli operations.
///
/// All variants carry owned strings so the error is cheap to clone into an
/// [`ErrorContext`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LxpkgError {
    /// The configuration file does not exist or cannot be read.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was looked up
        path: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// The configuration file cannot be parsed as key/value sections.
    #[error("Invalid configuration file {path}: {reason}")]
    ConfigMalformed {
        /// Path of the offending file
        path: String,
        /// Parser diagnostic
        reason: String,
    },

    /// The default configuration file could not be written.
    #[error("Failed to write configuration file {path}: {reason}")]
    ConfigWriteFailed {
        /// Destination path
        path: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// No operation flag was given on the command line.
    #[error("No operation specified")]
    EmptyRequest,

    /// The backend executable could not be located.
    #[error("lxpkg binary not found: {binary}")]
    BinaryNotFound {
        /// Name or path that was searched for
        binary: String,
    },

    /// The backend was located but the operating system refused to start it.
    #[error("Failed to start {binary}: {reason}")]
    SpawnFailed {
        /// Resolved executable path
        binary: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// Catch-all used when converting foreign errors for display.
    #[error("{message}")]
    Other {
        /// Full error message including its cause chain
        message: String,
    },
}

/// An [`LxpkgError`] with optional details and a suggestion for the user.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: LxpkgError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no details or suggestion attached.
    #[must_use]
    pub const fn new(error: LxpkgError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    ///
    /// Suggestions are actionable steps, displayed in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error, displayed in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context on stderr with terminal colors.
    pub fn display(&self) {
        self.write_to(&mut std::io::stderr().lock());
    }

    /// Write the colored error context to an arbitrary sink.
    ///
    /// The error line carries the same marker as [`logger::error`].
    pub fn write_to<W: std::io::Write>(&self, sink: &mut W) {
        use colored::Colorize;

        logger::error(sink, &self.error);

        if let Some(details) = &self.details {
            let _ = writeln!(sink, "{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            let _ = writeln!(sink, "{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with suggestions.
///
/// Recognizes [`LxpkgError`] anywhere in the cause chain, so errors wrapped
/// with `anyhow::Context` still get their tailored suggestion. Everything else
/// is shown with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(lxpkg_error) = error.chain().find_map(|e| e.downcast_ref::<LxpkgError>()) {
        return create_error_context(lxpkg_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        if io_error.kind() == std::io::ErrorKind::PermissionDenied {
            return ErrorContext::new(LxpkgError::Other {
                message: error.to_string(),
            })
            .with_suggestion(
                "Try running with elevated permissions (sudo) or check file ownership",
            );
        }
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(LxpkgError::Other {
        message,
    })
}

fn create_error_context(error: LxpkgError) -> ErrorContext {
    let (details, suggestion) = match &error {
        LxpkgError::ConfigNotFound {
            reason,
            ..
        } => (
            Some(reason.clone()),
            Some("Create it with 'lxpkg-cli --init-config' or point --config at an existing file"),
        ),
        LxpkgError::ConfigMalformed {
            ..
        } => (
            None,
            Some(
                "Check the [General] section; each setting is a key=value line, \
                 e.g. db_path=/var/db/lxpkg",
            ),
        ),
        LxpkgError::ConfigWriteFailed {
            ..
        } => (
            None,
            Some("Check that the parent directory is writable (the default lives in /etc)"),
        ),
        LxpkgError::EmptyRequest => {
            (None, Some("Pass at least one operation, e.g. 'lxpkg-cli -s -i firefox'. See --help"))
        }
        LxpkgError::BinaryNotFound {
            ..
        } => (
            Some("lxpkg-cli forwards every operation to the lxpkg executable".to_string()),
            Some("Install lxpkg, or pass --binary / set LXPKG_BINARY to its location"),
        ),
        LxpkgError::SpawnFailed {
            ..
        } => (None, Some("Check that the lxpkg binary is executable")),
        LxpkgError::Other {
            ..
        } => (None, None),
    };

    let mut context = ErrorContext::new(error);
    if let Some(details) = details {
        context = context.with_details(details);
    }
    if let Some(suggestion) = suggestion {
        context = context.with_suggestion(suggestion);
    }
    context
}
