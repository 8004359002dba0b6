//! Citation key validation
//!
//! Better BibTeX citekeys follow the `author_shorttitle_year` convention:
//! three lowercase alphanumeric segments joined by underscores. Validation
//! happens before any network call.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{RefnoteError, Result};

static CITEKEY_RE: OnceLock<Regex> = OnceLock::new();

fn citekey_re() -> &'static Regex {
    CITEKEY_RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+_[a-z0-9]+_[a-z0-9]+$").expect("citekey pattern is valid")
    })
}

/// A validated Better BibTeX citation key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Citekey(String);

impl Citekey {
    /// Validate a raw string as a citekey
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if citekey_re().is_match(raw) {
            Ok(Citekey(raw.to_string()))
        } else {
            Err(RefnoteError::InvalidCitekey(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Citekey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Citekey {
    type Err = RefnoteError;

    fn from_str(s: &str) -> Result<Self> {
        Citekey::parse(s)
    }
}
