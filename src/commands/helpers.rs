//! Helper functions shared across commands

use std::env;

use refnote_core::bbt::BetterBibtex;
use refnote_core::citekey::Citekey;
use refnote_core::error::{RefnoteError, Result};

/// Resolve editor to use from config, EDITOR, or VISUAL
///
/// Returns None if no editor is configured
pub fn resolve_editor(configured: Option<&str>) -> Option<String> {
    configured
        .map(String::from)
        .or_else(|| env::var("EDITOR").ok())
        .or_else(|| env::var("VISUAL").ok())
}

/// Launch the Zotero citation picker and validate its answer
pub fn pick_citekey(bbt: &BetterBibtex) -> Result<Citekey> {
    match bbt.citation_picker()? {
        Some(raw) => Citekey::parse(&raw),
        None => Err(RefnoteError::UsageError(
            "no citation key provided".to_string(),
        )),
    }
}
