//! Note store
//!
//! One `<citekey>.md` file per note in the configured notes directory.
//! Writing is always the last step of an operation, after all validation,
//! so no partial note files are ever left behind. Confirmation policy for
//! overwrite/delete lives with the commands, not here.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::citekey::Citekey;
use crate::error::{RefnoteError, Result};

pub struct NoteStore {
    notes_dir: PathBuf,
}

impl NoteStore {
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
        }
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Path of the note file for a citekey
    pub fn path(&self, citekey: &Citekey) -> PathBuf {
        self.notes_dir.join(format!("{}.md", citekey))
    }

    pub fn exists(&self, citekey: &Citekey) -> bool {
        self.path(citekey).is_file()
    }

    pub fn read(&self, citekey: &Citekey) -> Result<String> {
        let path = self.path(citekey);
        if !path.is_file() {
            return Err(RefnoteError::NoteNotFound(citekey.to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Write the rendered note, creating the notes directory if missing.
    /// Overwrites without asking; callers enforce the confirmation policy.
    pub fn write(&self, citekey: &Citekey, text: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.notes_dir)?;
        let path = self.path(citekey);
        fs::write(&path, text)?;
        debug!(citekey = %citekey, path = %path.display(), "note_written");
        Ok(path)
    }

    pub fn delete(&self, citekey: &Citekey) -> Result<()> {
        let path = self.path(citekey);
        if !path.is_file() {
            return Err(RefnoteError::NoteNotFound(citekey.to_string()));
        }
        fs::remove_file(&path)?;
        debug!(citekey = %citekey, path = %path.display(), "note_deleted");
        Ok(())
    }
}
