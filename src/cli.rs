//! CLI argument parsing for refnote

use clap::{ArgGroup, Parser, Subcommand};

use refnote_core::note::DEFAULT_TEMPLATE;

/// Refnote - reading-note CLI for your Zotero library
#[derive(Parser, Debug)]
#[command(name = "refnote")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new reading note. Launches the Zotero picker when no
    /// CITEKEY is given.
    #[command(alias = "new")]
    Add {
        /// Better BibTeX citation key
        citekey: Option<String>,

        /// Template for the note layout
        #[arg(long, short, default_value = DEFAULT_TEMPLATE)]
        template: String,

        /// Overwrite an existing note without asking
        #[arg(long, short)]
        force: bool,
    },

    /// Open a note in your editor of choice
    Edit {
        /// Better BibTeX citation key
        citekey: Option<String>,
    },

    /// Remove a note
    #[command(alias = "rm")]
    Remove {
        /// Better BibTeX citation key
        citekey: Option<String>,
    },

    /// List all available note templates
    Templates,

    /// Inspect or update the configuration
    #[command(group(
        ArgGroup::new("action")
            .required(true)
            .args(["list", "reset", "update_entry"]),
    ))]
    Config {
        /// List all config key/value pairs
        #[arg(long, short)]
        list: bool,

        /// Recreate the configuration interactively
        #[arg(long, short)]
        reset: bool,

        /// Update a single entry in the config file
        #[arg(long, short, value_name = "KEY")]
        update_entry: Option<String>,
    },
}
