//! Configuration for lxpkg-cli.
//!
//! The configuration is a flat, immutable mapping from eight fixed keys to
//! string values, read from the `[General]` section of an INI file and merged
//! over hardcoded defaults.
//!
//! # File Format
//!
//! The same file the lxpkg backend creates and reads:
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
//! List-valued keys (`repo_subdirs`, `use_flags`, `repos`) are comma-separated.
//! Values are taken verbatim; surrounding double quotes are stripped.
//!
//! # Location
//!
//! `--config <path>` (or `LXPKG_CONFIG`) selects the file. Without it,
//! [`DEFAULT_CONFIG_PATH`] is used, and a missing default file simply means
//! "all defaults". A missing *explicit* file is an error.
//!
//! # The `$(nproc)` sentinel
//!
//! `make_opts` and `max_jobs` default to values containing [`ALL_CORES`].
//! The token is passed through untouched and resolved by the backend.

mod parser;

pub use parser::parse_config_str;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::LxpkgError;

/// System-wide configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/lxpkg.conf";

/// Name of the table holding every recognized key.
pub const GENERAL_SECTION: &str = "General";

/// Sentinel meaning "use every available core", resolved by the backend.
pub const ALL_CORES: &str = "$(nproc)";

/// The fixed set of recognized configuration keys, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// Installed-package database location
    DbPath,
    /// Local checkout of the package repository
    RepoPath,
    /// Repository subdirectories searched for packages
    RepoSubdirs,
    /// Options passed to `make`
    MakeOpts,
    /// Enabled feature flags
    UseFlags,
    /// Parallel build jobs
    MaxJobs,
    /// Remote repository URLs
    Repos,
    /// Download and build cache
    CacheDir,
}

impl ConfigKey {
    /// Every key, in the order they are written and printed.
    pub const ALL: [Self; 8] = [
        Self::DbPath,
        Self::RepoPath,
        Self::RepoSubdirs,
        Self::MakeOpts,
        Self::UseFlags,
        Self::MaxJobs,
        Self::Repos,
        Self::CacheDir,
    ];

    /// The key as spelled in the configuration file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DbPath => "db_path",
            Self::RepoPath => "repo_path",
            Self::RepoSubdirs => "repo_subdirs",
            Self::MakeOpts => "make_opts",
            Self::UseFlags => "use_flags",
            Self::MaxJobs => "max_jobs",
            Self::Repos => "repos",
            Self::CacheDir => "cache_dir",
        }
    }

    /// Value used when the key is absent from the file.
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::DbPath => "/var/db/lxpkg",
            Self::RepoPath => "/usr/portage",
            Self::RepoSubdirs => "core,wayland,extra,community",
            Self::MakeOpts => "-j$(nproc)",
            Self::UseFlags => "gtk,qt",
            Self::MaxJobs => ALL_CORES,
            Self::Repos => "https://github.com/LearnixOS/repo",
            Self::CacheDir => "/var/cache/lxpkg",
        }
    }

    /// Looks a key up by its file spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed `max_jobs` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxJobs {
    /// Let the backend use every core (`$(nproc)`)
    AllCores,
    /// A fixed number of jobs
    Limit(u32),
}

/// Effective configuration: file values merged over defaults.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    db_path: String,
    repo_path: String,
    repo_subdirs: String,
    make_opts: String,
    use_flags: String,
    max_jobs: String,
    repos: String,
    cache_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: ConfigKey::DbPath.default_value().to_string(),
            repo_path: ConfigKey::RepoPath.default_value().to_string(),
            repo_subdirs: ConfigKey::RepoSubdirs.default_value().to_string(),
            make_opts: ConfigKey::MakeOpts.default_value().to_string(),
            use_flags: ConfigKey::UseFlags.default_value().to_string(),
            max_jobs: ConfigKey::MaxJobs.default_value().to_string(),
            repos: ConfigKey::Repos.default_value().to_string(),
            cache_dir: ConfigKey::CacheDir.default_value().to_string(),
        }
    }
}

impl Config {
    /// Builds a configuration from `(key, value)` overrides on top of the defaults.
    pub fn with_overrides<I, S>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (ConfigKey, S)>,
        S: Into<String>,
    {
        let mut config = Self::default();
        for (key, value) in overrides {
            *config.slot_mut(key) = value.into();
        }
        config
    }

    fn slot_mut(&mut self, key: ConfigKey) -> &mut String {
        match key {
            ConfigKey::DbPath => &mut self.db_path,
            ConfigKey::RepoPath => &mut self.repo_path,
            ConfigKey::RepoSubdirs => &mut self.repo_subdirs,
            ConfigKey::MakeOpts => &mut self.make_opts,
            ConfigKey::UseFlags => &mut self.use_flags,
            ConfigKey::MaxJobs => &mut self.max_jobs,
            ConfigKey::Repos => &mut self.repos,
            ConfigKey::CacheDir => &mut self.cache_dir,
        }
    }

    /// Raw string value of `key`.
    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::DbPath => &self.db_path,
            ConfigKey::RepoPath => &self.repo_path,
            ConfigKey::RepoSubdirs => &self.repo_subdirs,
            ConfigKey::MakeOpts => &self.make_opts,
            ConfigKey::UseFlags => &self.use_flags,
            ConfigKey::MaxJobs => &self.max_jobs,
            ConfigKey::Repos => &self.repos,
            ConfigKey::CacheDir => &self.cache_dir,
        }
    }

    /// All eight `(key, value)` pairs in [`ConfigKey::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (ConfigKey, &str)> + '_ {
        ConfigKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Installed-package database location.
    pub fn db_path(&self) -> &Path {
        Path::new(&self.db_path)
    }

    /// Local repository checkout.
    pub fn repo_path(&self) -> &Path {
        Path::new(&self.repo_path)
    }

    /// Download and build cache.
    pub fn cache_dir(&self) -> &Path {
        Path::new(&self.cache_dir)
    }

    /// Options passed to `make`, `$(nproc)` left unexpanded.
    pub fn make_opts(&self) -> &str {
        &self.make_opts
    }

    /// Repository subdirectories, split on commas.
    pub fn repo_subdirs(&self) -> Vec<&str> {
        split_list(&self.repo_subdirs)
    }

    /// Enabled feature flags, split on commas.
    pub fn use_flags(&self) -> Vec<&str> {
        split_list(&self.use_flags)
    }

    /// Remote repository URLs, split on commas.
    pub fn repos(&self) -> Vec<&str> {
        split_list(&self.repos)
    }

    /// Parallel job setting. Anything that is not a positive integer means all cores.
    pub fn max_jobs(&self) -> MaxJobs {
        match self.max_jobs.trim().parse::<u32>() {
            Ok(n) if n > 0 => MaxJobs::Limit(n),
            _ => MaxJobs::AllCores,
        }
    }

    /// `key=value` lines, one per key, as consumed by the backend.
    pub fn to_key_value_lines(&self) -> String {
        self.entries().map(|(key, value)| format!("{key}={value}\n")).collect()
    }

    /// Contents of a freshly generated configuration file holding the defaults.
    ///
    /// Unquoted `key=value` lines under `[General]`, as the backend writes them.
    pub fn default_file_contents() -> String {
        format!("[{GENERAL_SECTION}]\n{}", Self::default().to_key_value_lines())
    }
}

fn split_list(value: &str) -> Vec<&str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty()).collect()
}

/// Reads and parses the configuration file at `path`.
///
/// # Errors
///
/// - [`LxpkgError::ConfigNotFound`] if the file is missing or unreadable
/// - [`LxpkgError::ConfigMalformed`] if it is not valid INI or not UTF-8
pub fn load(path: &Path) -> Result<Config, LxpkgError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            LxpkgError::ConfigMalformed {
                path: path.display().to_string(),
                reason: "file is not valid UTF-8".to_string(),
            }
        } else {
            LxpkgError::ConfigNotFound {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        }
    })?;

    tracing::debug!(target: "config", "Loaded configuration file {}", path.display());
    parse_config_str(&content, path)
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Read from this file
    File(PathBuf),
    /// The default file was missing; built-in defaults are in use
    Defaults,
}

/// Loads the configuration the CLI should use.
///
/// With `explicit` set, the file must exist. Otherwise the
/// [`DEFAULT_CONFIG_PATH`] is tried and its absence is not an error.
pub fn load_effective(explicit: Option<&Path>) -> Result<(Config, ConfigOrigin), LxpkgError> {
    if let Some(path) = explicit {
        return load(path).map(|config| (config, ConfigOrigin::File(path.to_path_buf())));
    }

    let path = Path::new(DEFAULT_CONFIG_PATH);
    match load(path) {
        Ok(config) => Ok((config, ConfigOrigin::File(path.to_path_buf()))),
        Err(LxpkgError::ConfigNotFound {
            reason,
            ..
        }) => {
            tracing::warn!(
                target: "config",
                "No configuration at {} ({reason}), using defaults",
                path.display()
            );
            Ok((Config::default(), ConfigOrigin::Defaults))
        }
        Err(e) => Err(e),
    }
}

/// Writes a configuration file holding the defaults, unless one already exists.
///
/// Parent directories are created as needed. Returns `true` if the file was
/// written and `false` if it was already present.
pub fn write_default_config(path: &Path) -> Result<bool, LxpkgError> {
    if path.exists() {
        tracing::debug!(target: "config", "{} already exists, leaving it alone", path.display());
        return Ok(false);
    }

    let write_failed = |e: std::io::Error| LxpkgError::ConfigWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }
    std::fs::write(path, Config::default_file_contents()).map_err(write_failed)?;

    tracing::info!(target: "config", "Created default configuration file: {}", path.display());
    Ok(true)
}
