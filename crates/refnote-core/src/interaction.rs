//! User interaction capability
//!
//! Commands never talk to the terminal directly; confirmation prompts,
//! free-text prompts and list selection all go through this trait so the
//! resolution and rendering logic stays decoupled from stdin/stderr.

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Blocking prompts answered by the user (or a scripted test double)
pub trait Interaction {
    /// Ask a yes/no question. Returns false on anything but an explicit yes.
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Ask for a line of free text.
    fn prompt(&self, message: &str) -> Result<String>;

    /// Present an enumerated list and return the chosen zero-based index.
    /// Returns `None` when the answer is not a valid 1-based index.
    fn select(&self, items: &[String]) -> Result<Option<usize>>;
}

/// Parse a 1-based selection answer against a list of `len` items.
///
/// Anything non-numeric or outside `1..=len` is treated as "no valid
/// selection" rather than an error.
pub fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    if (1..=len).contains(&choice) {
        Some(choice - 1)
    } else {
        None
    }
}

/// Terminal implementation reading stdin and writing prompts to stderr
#[derive(Debug, Default)]
pub struct TerminalInteraction;

impl TerminalInteraction {
    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl Interaction for TerminalInteraction {
    fn confirm(&self, message: &str) -> Result<bool> {
        eprint!("{} [y/N] ", message);
        io::stderr().flush()?;
        let answer = self.read_line()?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    fn prompt(&self, message: &str) -> Result<String> {
        eprint!("{}: ", message);
        io::stderr().flush()?;
        self.read_line()
    }

    fn select(&self, items: &[String]) -> Result<Option<usize>> {
        for (i, item) in items.iter().enumerate() {
            eprintln!("  {}. {}", i + 1, item);
        }
        eprint!("Select an entry [1-{}]: ", items.len());
        io::stderr().flush()?;
        let answer = self.read_line()?;
        Ok(parse_selection(&answer, items.len()))
    }
}
