//! `refnote remove` command - delete a note, with confirmation
//!
//! There is no undo; deletion always asks first.

use crate::cli::Cli;
use crate::commands::helpers;
use refnote_core::bbt::BetterBibtex;
use refnote_core::citekey::Citekey;
use refnote_core::config::Config;
use refnote_core::error::{RefnoteError, Result};
use refnote_core::interaction::Interaction;
use refnote_core::store::NoteStore;

/// Execute the remove command
pub fn execute(
    cli: &Cli,
    config: &Config,
    ui: &dyn Interaction,
    citekey: Option<&str>,
) -> Result<()> {
    let requested = citekey.map(Citekey::parse).transpose()?;

    let citekey = match requested {
        Some(key) => key,
        None => helpers::pick_citekey(&BetterBibtex::connect(&config.style)?)?,
    };

    let store = NoteStore::new(&config.notes);
    if !store.exists(&citekey) {
        return Err(RefnoteError::NoteNotFound(citekey.to_string()));
    }

    let confirmed = ui.confirm("Are you sure you want to delete this note?")?;
    if !confirmed {
        if !cli.quiet {
            eprintln!("Keeping the note.");
        }
        return Ok(());
    }

    store.delete(&citekey)?;
    if !cli.quiet {
        println!("Removed {}", store.path(&citekey).display());
    }
    Ok(())
}
