//! Shared helpers for refnote integration tests

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A base URL nothing listens on; keeps tests away from a real local Zotero
pub const UNREACHABLE_BBT: &str = "http://127.0.0.1:9/better-bibtex";

/// Isolated config + notes directories for one test
pub struct TestEnv {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    /// Set up a config file pointing at a fresh notes directory.
    /// The editor is `true` so `edit` succeeds without a terminal.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let env = Self { dir };
        fs::create_dir_all(env.config_dir()).expect("create config dir");
        fs::create_dir_all(env.notes_dir()).expect("create notes dir");
        fs::write(
            env.config_dir().join("config.toml"),
            format!(
                "name = \"Test User\"\nemail = \"test@example.org\"\neditor = \"true\"\nnotes = \"{}\"\nstyle = \"apa\"\n",
                env.notes_dir().display()
            ),
        )
        .expect("write config");
        env
    }

    /// Like `new`, but without a config file (first-run scenarios)
    pub fn without_config() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let env = Self { dir };
        fs::create_dir_all(env.config_dir()).expect("create config dir");
        env
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.dir.path().join("notes")
    }

    pub fn note_path(&self, citekey: &str) -> PathBuf {
        self.notes_dir().join(format!("{}.md", citekey))
    }

    /// Command with the config dir wired up and the BBT URL pointing nowhere
    pub fn refnote(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("refnote");
        cmd.env("REFNOTE_CONFIG_DIR", self.config_dir());
        cmd.env("REFNOTE_BBT_URL", UNREACHABLE_BBT);
        cmd
    }

    /// Command talking to a stub BBT server
    pub fn refnote_with_bbt(&self, base_url: &str) -> Command {
        let mut cmd = self.refnote();
        cmd.env("REFNOTE_BBT_URL", base_url);
        cmd
    }
}
