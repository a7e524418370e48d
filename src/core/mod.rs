//! Core types for lxpkg-cli
//!
//! Error handling lives here:
//! - **Strongly-typed errors** ([`LxpkgError`]) for precise handling in code
//! - **User-friendly contexts** ([`ErrorContext`]) with actionable suggestions for CLI users
//! - [`user_friendly_error`] to turn any `anyhow::Error` into something printable

pub mod error;

pub use error::{ErrorContext, LxpkgError, user_friendly_error};
