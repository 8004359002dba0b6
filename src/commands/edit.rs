//! `refnote edit` command - open a note in the configured editor
//!
//! When the note does not exist yet, offers to create it first.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::cli::Cli;
use crate::commands::{add, helpers};
use refnote_core::bbt::BetterBibtex;
use refnote_core::citekey::Citekey;
use refnote_core::config::Config;
use refnote_core::error::{RefnoteError, Result};
use refnote_core::interaction::Interaction;
use refnote_core::note::DEFAULT_TEMPLATE;
use refnote_core::store::NoteStore;

/// Execute the edit command
pub fn execute(
    cli: &Cli,
    config: &Config,
    ui: &dyn Interaction,
    citekey: Option<&str>,
) -> Result<()> {
    let requested = citekey.map(Citekey::parse).transpose()?;

    // Only the picker path needs the service; editing by citekey is local.
    let citekey = match requested {
        Some(key) => key,
        None => helpers::pick_citekey(&BetterBibtex::connect(&config.style)?)?,
    };

    let store = NoteStore::new(&config.notes);
    if !store.exists(&citekey) {
        let create = ui.confirm("This note does not exist yet. Create it now?")?;
        if !create {
            return Ok(());
        }
        let bbt = BetterBibtex::connect(&config.style)?;
        return add::create_note(cli, config, ui, &bbt, &citekey, DEFAULT_TEMPLATE, false);
    }

    let editor = helpers::resolve_editor(config.editor.as_deref()).ok_or_else(|| {
        RefnoteError::UsageError(
            "no editor configured. Set the editor config entry or the EDITOR environment variable"
                .to_string(),
        )
    })?;

    open_editor(&editor, &store.path(&citekey))
}

fn open_editor(editor: &str, path: &Path) -> Result<()> {
    debug!(editor = %editor, path = %path.display(), "open_editor");

    // The configured editor may carry arguments ("code -w").
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| RefnoteError::UsageError("empty editor command".to_string()))?;

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| RefnoteError::Other(format!("failed to open editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(RefnoteError::Other(format!(
            "editor '{}' exited with non-zero status",
            editor
        )));
    }
    Ok(())
}
