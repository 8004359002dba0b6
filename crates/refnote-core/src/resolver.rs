//! Candidate resolution
//!
//! Decides which single search result a note is built from: auto-select a
//! lone candidate, prompt when there are several, abort when there are none.
//! The system never guesses among ambiguous matches.

use tracing::debug;

use crate::bbt::types::Candidate;
use crate::bbt::BibliographySource;
use crate::citekey::Citekey;
use crate::error::{RefnoteError, Result};
use crate::interaction::Interaction;

/// Pick exactly one candidate, or abort
pub fn resolve<'a>(
    citekey: &Citekey,
    candidates: &'a [Candidate],
    bib: &dyn BibliographySource,
    ui: &dyn Interaction,
) -> Result<&'a Candidate> {
    match candidates {
        [] => Err(RefnoteError::NoResults(citekey.to_string())),
        [only] => Ok(only),
        many => {
            debug!(citekey = %citekey, count = many.len(), "ambiguous_search_result");
            let lines: Vec<String> = many.iter().map(|c| describe(c, bib)).collect();
            match ui.select(&lines)? {
                Some(index) => Ok(&many[index]),
                None => Err(RefnoteError::NoSelection),
            }
        }
    }
}

/// Human-readable line for one candidate: the rendered bibliography entry
/// when the lookup succeeds, otherwise whatever identifying fields the raw
/// record carries.
fn describe(candidate: &Candidate, bib: &dyn BibliographySource) -> String {
    if let Some(key) = candidate.citekey.as_deref() {
        match bib.bibliography(key) {
            Ok(line) if !line.is_empty() => return line,
            Ok(_) => {}
            Err(error) => debug!(citekey = key, %error, "bibliography_lookup_failed"),
        }
    }

    match (candidate.citekey.as_deref(), candidate.title.as_deref()) {
        (Some(key), Some(title)) => format!("{} - {}", key, title),
        (Some(key), None) => key.to_string(),
        (None, Some(title)) => title.to_string(),
        (None, None) => "(unidentified result)".to_string(),
    }
}
