//! `refnote add` command - create a reading note for a citekey
//!
//! Search, resolution, extraction and rendering all happen before anything
//! touches the notes directory; the file write is the final step.

use tracing::debug;

use crate::cli::Cli;
use crate::commands::helpers;
use refnote_core::bbt::BetterBibtex;
use refnote_core::citekey::Citekey;
use refnote_core::config::Config;
use refnote_core::error::Result;
use refnote_core::fields::NormalizedFields;
use refnote_core::interaction::Interaction;
use refnote_core::note::Note;
use refnote_core::resolver;
use refnote_core::store::NoteStore;

/// Execute the add command
pub fn execute(
    cli: &Cli,
    config: &Config,
    ui: &dyn Interaction,
    citekey: Option<&str>,
    template: &str,
    force: bool,
) -> Result<()> {
    // An invalid citekey aborts before any network call.
    let requested = citekey.map(Citekey::parse).transpose()?;

    let bbt = BetterBibtex::connect(&config.style)?;
    let citekey = match requested {
        Some(key) => key,
        None => helpers::pick_citekey(&bbt)?,
    };

    create_note(cli, config, ui, &bbt, &citekey, template, force)
}

/// Search, resolve, render and write one note. Shared with `edit` for the
/// create-on-missing flow.
pub fn create_note(
    cli: &Cli,
    config: &Config,
    ui: &dyn Interaction,
    bbt: &BetterBibtex,
    citekey: &Citekey,
    template: &str,
    force: bool,
) -> Result<()> {
    let candidates = bbt.search(citekey)?;
    let candidate = resolver::resolve(citekey, &candidates, bbt, ui)?;
    let fields = NormalizedFields::extract(candidate);
    debug!(citekey = %citekey, title = fields.title.as_deref().unwrap_or(""), "fields_extracted");

    let note = Note::new(citekey.clone(), fields, config, template)?;

    let store = NoteStore::new(&config.notes);
    if store.exists(citekey) && !force {
        let overwrite = ui.confirm("This note already exists. Overwrite it?")?;
        if !overwrite {
            if !cli.quiet {
                eprintln!("Keeping the existing note. Use --force to overwrite.");
            }
            return Ok(());
        }
    }

    let path = store.write(citekey, &note.render())?;
    if !cli.quiet {
        println!("{}", path.display());
    }
    Ok(())
}
