//! Command-line interface for lxpkg-cli.
//!
//! The front-end takes lxpkg's operation flags, checks that at least one was
//! given, and forwards them to the backend binary. Everything the backend
//! prints is relayed, and its exit status becomes ours.
//!
//! # Usage
//!
//! ```bash
//! # Sync repositories, then install a package
//! lxpkg-cli -s -i firefox
//!
//! # Search without the spinner, using a custom configuration
//! lxpkg-cli --no-progress --config ~/lxpkg.conf -q vim
//!
//! # Inspect or create the configuration
//! lxpkg-cli --show-config
//! lxpkg-cli --init-config
//! ```
//!
//! # Front-end options
//!
//! These are handled here and never forwarded:
//! - `--config` - configuration file (default `/etc/lxpkg.conf`)
//! - `--binary` - backend executable (default `lxpkg` on `PATH`)
//! - `--verbose` / `--quiet` - diagnostic and status output levels
//! - `--no-progress` - disable the spinner
//!
//! # Exit status
//!
//! | Situation | Status |
//! |---|---|
//! | Backend ran | the backend's status |
//! | No operation given, binary missing, config error | 1 |
//! | Unknown flag or missing value | 2 (from clap) |

pub mod request;


use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::backend::{self, BackendCommand};
use crate::config::{self, ConfigOrigin, DEFAULT_CONFIG_PATH};
use crate::core::LxpkgError;
use crate::utils::logger;
use crate::utils::platform::resolve_path;
use crate::utils::progress::{self, is_progress_disabled, spinner_with_message};

pub use request::{CommandLineRequest, Operation, TranslatedArgs, translate};

/// Runtime settings derived from the command line.
///
/// Built once by [`Cli::build_config`] and passed down explicitly, so tests
/// can drive [`Cli::execute_with_config`] without touching the process
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Filter directive for `tracing`. `None` defers to `RUST_LOG`.
    pub log_level: Option<String>,

    /// Hide the spinner and progress bar.
    pub no_progress: bool,

    /// Suppress info and success lines. Errors are always shown.
    pub quiet: bool,

    /// Explicit configuration file, before tilde expansion.
    pub config_path: Option<String>,

    /// Backend executable name or path.
    pub binary: String,
}

/// Top-level command line of lxpkg-cli.
#[derive(Parser, Debug)]
#[command(
    name = "lxpkg-cli",
    about = "Front-end for the lxpkg package manager",
    version,
    long_about = "Front-end for the lxpkg package manager. Operation flags are forwarded to the \
                  lxpkg backend; its output and exit status are relayed unchanged."
)]
pub struct Cli {
    /// Operations to forward to the backend
    #[command(flatten)]
    request: CommandLineRequest,

    /// Path to the configuration file
    #[arg(long, env = "LXPKG_CONFIG", value_name = "PATH")]
    config: Option<String>,

    /// Backend executable (name on PATH or path)
    #[arg(long, env = "LXPKG_BINARY", value_name = "NAME", default_value = "lxpkg")]
    binary: String,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show errors and the backend's own output
    #[arg(long)]
    quiet: bool,

    /// Disable the progress spinner
    #[arg(long)]
    no_progress: bool,

    /// Print the effective configuration as key=value lines and exit
    #[arg(long, conflicts_with = "init_config")]
    show_config: bool,

    /// Write the default configuration file if it does not exist and exit
    #[arg(long)]
    init_config: bool,
}

impl Cli {
    /// Parses arguments, sets up logging and runs.
    ///
    /// Returns the status the process should exit with.
    pub async fn execute(self) -> Result<i32> {
        let config = self.build_config();
        init_logging(config.log_level.as_deref());
        self.execute_with_config(config).await
    }

    /// Derives the runtime settings from the parsed flags and environment.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            no_progress: self.no_progress || is_progress_disabled(),
            quiet: self.quiet,
            config_path: self.config.clone(),
            binary: self.binary.clone(),
        }
    }

    /// The requested operations.
    pub fn request(&self) -> &CommandLineRequest {
        &self.request
    }

    /// Runs with explicit settings.
    ///
    /// # Errors
    ///
    /// Any [`LxpkgError`] the front-end itself hits. A backend that exits
    /// non-zero is reported through the returned status instead.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<i32> {
        let explicit_path = config.config_path.as_deref().map(resolve_path).transpose()?;

        if self.init_config {
            let path = explicit_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
            return init_config_file(&path, config.quiet);
        }

        // Usage errors win over configuration errors
        let args = if self.show_config {
            None
        } else {
            match translate(&self.request) {
                Ok(args) => Some(args),
                Err(e @ LxpkgError::EmptyRequest) => {
                    let _ = Cli::command().print_help();
                    return Err(e.into());
                }
                Err(e) => return Err(e.into()),
            }
        };

        let (settings, origin) = config::load_effective(explicit_path.as_deref())?;
        match &origin {
            ConfigOrigin::File(path) => {
                tracing::debug!(target: "config", "Using configuration from {}", path.display());
            }
            ConfigOrigin::Defaults => tracing::debug!(target: "config", "Using built-in defaults"),
        }
        for (key, value) in settings.entries() {
            tracing::trace!(target: "config", "{key} = {value}");
        }
        tracing::debug!(
            target: "config",
            "db: {}, repo: {} ({}), cache: {}",
            settings.db_path().display(),
            settings.repo_path().display(),
            settings.repo_subdirs().join(" "),
            settings.cache_dir().display()
        );
        tracing::debug!(
            target: "config",
            "make_opts: {}, use_flags: {}, max_jobs: {:?}, repositories: {}",
            settings.make_opts(),
            settings.use_flags().join(" "),
            settings.max_jobs(),
            settings.repos().join(" ")
        );

        match args {
            Some(args) => run_backend(&config, args).await,
            None => {
                let mut out = io::stdout().lock();
                let _ = out.write_all(settings.to_key_value_lines().as_bytes());
                Ok(0)
            }
        }
    }
}

/// Runs the configured backend with `args` and relays the outcome.
async fn run_backend(config: &CliConfig, args: TranslatedArgs) -> Result<i32> {
    let command_line = format!("{} {}", config.binary, args);
    if !config.quiet {
        logger::info(&mut io::stdout().lock(), format_args!("Executing command: {command_line}"));
    }

    let show_progress = !config.no_progress;
    progress::progress("Preparing", args.len() as u64, show_progress).await;
    let spinner = spinner_with_message(format!("Running {command_line}"), show_progress);

    let outcome = BackendCommand::new(config.binary.as_str())
        .args(args)
        .with_context("lxpkg")
        .execute()
        .await;
    spinner.finish_and_clear();

    let result = outcome?;
    Ok(backend::relay(&result, &mut io::stdout().lock(), &mut io::stderr().lock(), config.quiet))
}

fn init_config_file(path: &std::path::Path, quiet: bool) -> Result<i32> {
    let created = config::write_default_config(path)?;
    if !quiet {
        let mut out = io::stdout().lock();
        if created {
            logger::success(
                &mut out,
                format_args!("Created configuration file {}", path.display()),
            );
        } else {
            logger::info(&mut out, format_args!("{} already exists, not modified", path.display()));
        }
    }
    Ok(0)
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `level` is used, falling back to
/// `warn`. Output goes to stderr so it never mixes with the backend's stdout.
pub fn init_logging(level: Option<&str>) {
    let filter = match (std::env::var("RUST_LOG").is_ok(), level) {
        (true, _) => EnvFilter::from_default_env(),
        (false, Some(level)) => EnvFilter::new(level),
        (false, None) => EnvFilter::new("warn"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
