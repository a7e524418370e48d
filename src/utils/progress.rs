//! Progress indicators
//!
//! Thin wrappers over `indicatif` with consistent styling. Two kinds are used:
//!
//! - a **spinner** shown while the lxpkg backend runs, cleared before its
//!   output is relayed
//! - a **bounded bar** ([`progress`]) that advances over a fixed number of
//!   steps. It is decorative only: the backend reports no progress, so the
//!   bar is not tied to any real work.
//!
//! # Disabling
//!
//! Indicators are hidden when `--no-progress` is given or the
//! `LXPKG_NO_PROGRESS` environment variable is set. `indicatif` also stays
//! silent on its own when stderr is not a terminal.
//!
//! ```rust
//! use lxpkg_cli::utils::progress::ProgressBar;
//!
//! let spinner = ProgressBar::hidden();
//! spinner.set_message("Running lxpkg -s");
//! spinner.finish_and_clear();
//! ```

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::time::Duration;

/// Environment variable that disables every progress indicator.
pub const NO_PROGRESS_ENV: &str = "LXPKG_NO_PROGRESS";

/// Delay between two steps of the decorative [`progress`] bar.
const STEP_DELAY: Duration = Duration::from_millis(20);

/// Returns `true` when `LXPKG_NO_PROGRESS` is set to any value.
pub fn is_progress_disabled() -> bool {
    std::env::var_os(NO_PROGRESS_ENV).is_some()
}

/// A progress bar or spinner with lxpkg styling.
#[derive(Clone)]
pub struct ProgressBar {
    inner: IndicatifBar,
}

impl ProgressBar {
    /// Creates a bar tracking `len` steps, hidden if progress is disabled.
    pub fn new(len: u64) -> Self {
        if is_progress_disabled() {
            return Self::hidden();
        }
        let bar = IndicatifBar::new(len);
        bar.set_style(bar_style());
        Self {
            inner: bar,
        }
    }

    /// Creates a spinner for work of unknown length.
    ///
    /// The spinner ticks on its own every 100ms until finished.
    pub fn new_spinner() -> Self {
        if is_progress_disabled() {
            return Self::hidden();
        }
        let bar = IndicatifBar::new_spinner();
        bar.set_style(spinner_style());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self {
            inner: bar,
        }
    }

    /// Creates an indicator that silently ignores every update.
    pub fn hidden() -> Self {
        Self {
            inner: IndicatifBar::hidden(),
        }
    }

    /// Whether anything will be drawn.
    pub fn is_hidden(&self) -> bool {
        self.inner.is_hidden()
    }

    /// Sets the message displayed next to the indicator.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Sets the prefix displayed before the indicator.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.inner.set_prefix(prefix.into());
    }

    /// Advances the bar by `delta` steps.
    pub fn inc(&self, delta: u64) {
        self.inner.inc(delta);
    }

    /// Current position of the bar.
    pub fn position(&self) -> u64 {
        self.inner.position()
    }

    /// Finishes and removes the indicator from the terminal.
    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }
}

fn bar_style() -> IndicatifStyle {
    IndicatifStyle::default_bar()
        .template("{prefix:.bold} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| IndicatifStyle::default_bar())
        .progress_chars("━╸━")
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{prefix:.bold} {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| IndicatifStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
}

/// Creates a spinner showing `msg`, or a hidden one when `enabled` is false.
pub fn spinner_with_message(msg: impl Into<String>, enabled: bool) -> ProgressBar {
    let spinner = if enabled {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    spinner.set_message(msg);
    spinner
}

/// Render a bar labelled `task` that advances through `total` steps.
///
/// Purely cosmetic. Steps are spaced with `tokio::time::sleep`, so the
/// runtime stays free between them. When `enabled` is false, or progress is
/// disabled through the environment, nothing is drawn and the call returns
/// immediately. Returns the number of steps the bar advanced.
pub async fn progress(task: &str, total: u64, enabled: bool) -> u64 {
    let bar = if enabled {
        ProgressBar::new(total)
    } else {
        ProgressBar::hidden()
    };
    if bar.is_hidden() {
        return 0;
    }

    bar.set_prefix(task.to_string());
    for _ in 0..total {
        tokio::time::sleep(STEP_DELAY).await;
        bar.inc(1);
    }
    let advanced = bar.position();
    bar.finish_and_clear();
    advanced
}
