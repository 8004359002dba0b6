//! `refnote config` command - list, reset, or update the configuration

use refnote_core::config::Config;
use refnote_core::error::Result;
use refnote_core::interaction::Interaction;

/// Execute the config command. Exactly one of the three actions is set
/// (enforced by the argument group).
pub fn execute(
    config: &Config,
    ui: &dyn Interaction,
    list: bool,
    reset: bool,
    update_entry: Option<&str>,
) -> Result<()> {
    if list {
        for (key, value) in config.entries() {
            println!("{}: {}", key, value);
        }
        return Ok(());
    }

    if reset {
        let overwrite =
            ui.confirm("Do you really want to create a new config? This overwrites the old one.")?;
        if !overwrite {
            return Ok(());
        }
        let fresh = Config::create_interactive(ui)?;
        fresh.save()?;
        return Ok(());
    }

    if let Some(key) = update_entry {
        let old = config.entry(key)?;
        println!("Old value: {}", old);
        let value = ui.prompt("New value")?;

        let mut updated = config.clone();
        updated.set_entry(key, &value)?;
        updated.save()?;
    }

    Ok(())
}
