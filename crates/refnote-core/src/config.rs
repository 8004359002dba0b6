//! Per-user configuration (stored in ~/.config/refnote/config.toml)
//!
//! Holds the user's identity, editor command, notes directory and citation
//! style. Loaded once per invocation and passed explicitly into each
//! component; there is no shared mutable configuration state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RefnoteError, Result};
use crate::interaction::Interaction;

const CONFIG_DIR: &str = "refnote";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "REFNOTE_CONFIG_DIR";

/// Default citation style for bibliography rendering
const DEFAULT_STYLE: &str = "apa";

/// Valid keys for `config --update-entry`
pub const CONFIG_KEYS: &[&str] = &["name", "email", "editor", "notes", "style"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name written into the note header
    pub name: String,
    pub email: String,
    /// Editor command; falls back to $EDITOR/$VISUAL when unset
    #[serde(default)]
    pub editor: Option<String>,
    /// Directory holding the `<citekey>.md` files
    pub notes: PathBuf,
    /// Citation style id used for candidate disambiguation
    #[serde(default = "default_style")]
    pub style: String,
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

impl Config {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RefnoteError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RefnoteError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| RefnoteError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| RefnoteError::Other("invalid config path".to_string()))?;
        fs::create_dir_all(config_dir)?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| RefnoteError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load the config, creating it interactively on first run
    pub fn load_or_init(ui: &dyn Interaction) -> Result<Self> {
        if Self::exists() {
            return Self::load();
        }

        eprintln!("Missing configuration file. Proceeding to create a new one.");
        let config = Self::create_interactive(ui)?;
        config.save()?;
        Ok(config)
    }

    /// Populate a fresh config through prompts
    pub fn create_interactive(ui: &dyn Interaction) -> Result<Self> {
        let name = ui.prompt("Enter your name")?;
        let email = ui.prompt("Enter your email")?;
        let editor = ui.prompt("The command to execute your editor of choice")?;
        let notes = ui.prompt("Enter the location for your notes")?;

        Ok(Self {
            name,
            email,
            editor: if editor.is_empty() { None } else { Some(editor) },
            notes: PathBuf::from(notes),
            style: default_style(),
        })
    }

    /// All key/value pairs, for `config --list`
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .map(|&key| (key, self.entry(key).unwrap_or_default()))
            .collect()
    }

    /// Current value for a single key
    pub fn entry(&self, key: &str) -> Result<String> {
        match key {
            "name" => Ok(self.name.clone()),
            "email" => Ok(self.email.clone()),
            "editor" => Ok(self.editor.clone().unwrap_or_default()),
            "notes" => Ok(self.notes.display().to_string()),
            "style" => Ok(self.style.clone()),
            _ => Err(RefnoteError::UnknownConfigEntry(key.to_string())),
        }
    }

    /// Update a single key
    pub fn set_entry(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "editor" => {
                self.editor = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "notes" => self.notes = PathBuf::from(value),
            "style" => self.style = value.to_string(),
            _ => return Err(RefnoteError::UnknownConfigEntry(key.to_string())),
        }
        Ok(())
    }

    /// Directory for user-supplied template overrides
    pub fn templates_dir(&self) -> PathBuf {
        self.notes.join("templates")
    }
}
