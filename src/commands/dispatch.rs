//! Command dispatch logic for refnote

use crate::cli::{Cli, Commands};
use crate::commands;
use refnote_core::config::Config;
use refnote_core::error::Result;
use refnote_core::interaction::TerminalInteraction;

pub fn run(cli: &Cli) -> Result<()> {
    let ui = TerminalInteraction;

    // All commands need the config; it is created interactively on first run.
    let config = Config::load_or_init(&ui)?;

    match &cli.command {
        Commands::Add {
            citekey,
            template,
            force,
        } => commands::add::execute(cli, &config, &ui, citekey.as_deref(), template, *force),

        Commands::Edit { citekey } => {
            commands::edit::execute(cli, &config, &ui, citekey.as_deref())
        }

        Commands::Remove { citekey } => {
            commands::remove::execute(cli, &config, &ui, citekey.as_deref())
        }

        Commands::Templates => commands::templates::execute(&config),

        Commands::Config {
            list,
            reset,
            update_entry,
        } => commands::config::execute(&config, &ui, *list, *reset, update_entry.as_deref()),
    }
}
