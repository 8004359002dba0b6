//! `refnote templates` command - list available note templates

use refnote_core::config::Config;
use refnote_core::error::Result;
use refnote_core::note::{self, DEFAULT_TEMPLATE};

/// Execute the templates command
pub fn execute(config: &Config) -> Result<()> {
    for name in note::list_templates(config) {
        if name == DEFAULT_TEMPLATE {
            println!("{} (default)", name);
        } else {
            println!("{}", name);
        }
    }
    Ok(())
}
