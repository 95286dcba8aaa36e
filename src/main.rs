//! `cbuild` entry point
//!
//! Parses command-line arguments, runs the selected command and renders
//! failures with suggestions.

use anyhow::Result;
use clap::Parser;
use component_builder::cli;
use component_builder::core::user_friendly_error;

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
