//! Terminal output and platform helpers.

pub mod logger;
pub mod platform;
pub mod progress;

pub use platform::{find_executable, resolve_path};
pub use progress::ProgressBar;
