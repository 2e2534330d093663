//! MCCI CLI entry point
//!
//! Parses command-line arguments, runs the selected command and prints
//! failures with context and suggestions.
//!
//! - `install` - Detect content files and install them into a profile
//! - `detect` - Report what kind of content a file is
//! - `profile` - Manage launcher profiles
//! - `config` - Manage global configuration

use anyhow::Result;
use clap::Parser;
use mcci_cli::cli;
use mcci_cli::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
