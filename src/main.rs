//! Refnote - reading-note CLI for your Zotero library
//!
//! Creates, edits, and removes Markdown reading notes keyed by Better
//! BibTeX citation keys, with metadata pulled from the local BBT endpoints.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use refnote_core::error::ExitCode as RefnoteExitCode;
use refnote_core::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match commands::dispatch::run(&cli) {
        Ok(()) => ExitCode::from(RefnoteExitCode::Success as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
