//! Field normalization
//!
//! Turns one raw search candidate into the fixed set of note fields.
//! Extraction is pure and total: absent or malformed fields map to `None`.

use serde_json::Value;

use crate::bbt::types::{Candidate, Name};

/// Length cap for the condensed author string
pub const AUTHOR_STR_MAX: usize = 60;

/// The fixed-shape record a note is rendered from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedFields {
    pub title: Option<String>,
    pub doi: Option<String>,
    pub kind: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
}

impl NormalizedFields {
    /// Extract the note fields from a raw candidate
    pub fn extract(candidate: &Candidate) -> Self {
        Self {
            title: candidate.title.clone(),
            doi: candidate.doi.clone(),
            kind: candidate.kind.clone(),
            year: issued_year(candidate),
            author: author_string(candidate),
        }
    }
}

/// Year of the first date entry: `issued["date-parts"][0][0]`.
/// BBT emits numbers or numeric strings depending on the translator.
fn issued_year(candidate: &Candidate) -> Option<i32> {
    let part = candidate.issued.as_ref()?.date_parts.first()?.first()?;
    match part {
        Value::Number(n) => n.as_i64().map(|year| year as i32),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Condensed `"family, given; family, given; ..."` author string,
/// pruned once it reaches [`AUTHOR_STR_MAX`]
fn author_string(candidate: &Candidate) -> Option<String> {
    let names: Vec<String> = candidate.author.iter().filter_map(format_name).collect();
    if names.is_empty() {
        return None;
    }

    let joined = names.join("; ");
    if joined.chars().count() >= AUTHOR_STR_MAX {
        Some(prune_author_str(&joined, AUTHOR_STR_MAX))
    } else {
        Some(joined)
    }
}

fn format_name(name: &Name) -> Option<String> {
    let family = name.family.as_deref()?;
    Some(match name.given.as_deref() {
        Some(given) => format!("{}, {}", family, given),
        None => family.to_string(),
    })
}

/// Shorten an author string that hit the cap: truncate the non-last authors
/// to `max_len` characters, mark the cut with `"...; "`, and append the last
/// author's full name. The last author is never truncated, so the result may
/// still exceed `max_len` by the length of that name. Deliberate tolerance.
pub fn prune_author_str(author_str: &str, max_len: usize) -> String {
    let (rest, last) = author_str.rsplit_once("; ").unwrap_or(("", author_str));
    let prefix: String = rest.chars().take(max_len).collect();
    format!("{}...; {}", prefix, last)
}
