//! lxpkg-cli entry point
//!
//! Parses the command line, runs the requested operations through the lxpkg
//! backend and exits with the backend's status. Front-end failures are shown
//! with a suggestion and exit 1.

use clap::Parser;
use lxpkg_cli::cli;
use lxpkg_cli::core::user_friendly_error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Usage errors exit 2 from here
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
