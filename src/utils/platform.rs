//! Path expansion and executable lookup.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Expands `~` and environment variables in a user-supplied path.
///
/// Only used for paths given on the command line (such as `--config`).
/// Configuration *values* are never expanded here; tokens like `$(nproc)`
/// are left for the backend.
///
/// ```rust
/// use lxpkg_cli::utils::platform::resolve_path;
///
/// let path = resolve_path("/etc/lxpkg.conf").unwrap();
/// assert_eq!(path, std::path::PathBuf::from("/etc/lxpkg.conf"));
/// ```
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded =
        shellexpand::full(path).with_context(|| format!("Failed to expand path: {path}"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Locates an executable by name or path.
///
/// A candidate containing a path separator (`./lxpkg`, `/usr/bin/lxpkg`) is
/// checked directly relative to the working directory; a bare name is
/// searched on `PATH`. Returns `None` when nothing runnable is found.
pub fn find_executable(candidate: &str) -> Option<PathBuf> {
    if candidate.is_empty() {
        return None;
    }

    let path = Path::new(candidate);
    if path.components().count() > 1 {
        return path.is_file().then(|| path.to_path_buf());
    }

    which::which(candidate).ok()
}
