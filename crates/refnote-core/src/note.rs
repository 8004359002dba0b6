//! Note construction and rendering
//!
//! A note merges the normalized fields with a timestamp and the user's
//! identity into a text template. Templates are plain Markdown with
//! `{{key}}` placeholders over a fixed key set; missing fields render as
//! empty output, never as an error.
//!
//! The content template is resolved from the user's template directory
//! first (`<notes>/templates/<name>.md`), then from the built-ins compiled
//! into the binary. The master header template is always built in.

use std::fs;

use chrono::Local;

use crate::citekey::Citekey;
use crate::config::Config;
use crate::error::{RefnoteError, Result};
use crate::fields::NormalizedFields;

/// Template used when none is requested
pub const DEFAULT_TEMPLATE: &str = "simple";

const MASTER_TEMPLATE: &str = include_str!("../templates/master.md");

const BUILTIN_TEMPLATES: &[(&str, &str)] =
    &[("simple", include_str!("../templates/simple.md"))];

/// An in-memory note, constructed once per invocation and rendered to text.
/// The timestamp is captured at construction, so repeated renders within one
/// invocation are stable.
#[derive(Debug, Clone)]
pub struct Note {
    citekey: Citekey,
    fields: NormalizedFields,
    author: String,
    ts_iso: String,
    ts_day: String,
    content_template: String,
}

impl Note {
    pub fn new(
        citekey: Citekey,
        fields: NormalizedFields,
        config: &Config,
        template: &str,
    ) -> Result<Self> {
        let content_template = load_content_template(config, template)?;
        let now = Local::now();

        Ok(Self {
            citekey,
            fields,
            author: config.name.clone(),
            ts_iso: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
            ts_day: now.format("%m.%d.%y").to_string(),
            content_template,
        })
    }

    /// Render the note body. Never fails; absent fields produce blank slots.
    pub fn render(&self) -> String {
        let vars = [
            ("citekey", self.citekey.to_string()),
            ("author", self.author.clone()),
            ("ts", self.ts_iso.clone()),
            ("ts_day", self.ts_day.clone()),
            ("title", self.fields.title.clone().unwrap_or_default()),
            ("creator", self.fields.author.clone().unwrap_or_default()),
            (
                "date",
                self.fields.year.map(|y| y.to_string()).unwrap_or_default(),
            ),
            ("doi", self.fields.doi.clone().unwrap_or_default()),
            ("type", self.fields.kind.clone().unwrap_or_default()),
        ];

        let header = substitute(MASTER_TEMPLATE, &vars);
        let content = substitute(&self.content_template, &vars);
        format!("{}\n{}", header.trim_end(), content_block(&content))
    }
}

fn content_block(content: &str) -> String {
    let trimmed = content.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{}\n", trimmed)
    }
}

fn substitute(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{{{}}}}}", key), value);
    }
    out
}

fn load_content_template(config: &Config, name: &str) -> Result<String> {
    let user_template = config.templates_dir().join(format!("{}.md", name));
    if user_template.is_file() {
        return Ok(fs::read_to_string(user_template)?);
    }

    BUILTIN_TEMPLATES
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, body)| body.to_string())
        .ok_or_else(|| RefnoteError::TemplateNotFound(name.to_string()))
}

/// All available template names: user overrides plus built-ins
pub fn list_templates(config: &Config) -> Vec<String> {
    let mut names: Vec<String> = BUILTIN_TEMPLATES
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();

    if let Ok(entries) = fs::read_dir(config.templates_dir()) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
    }

    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn config(notes: PathBuf) -> Config {
        Config {
            name: "Jane Doe".to_string(),
            email: "jane@example.org".to_string(),
            editor: None,
            notes,
            style: "apa".to_string(),
        }
    }

    fn fields() -> NormalizedFields {
        NormalizedFields {
            title: Some("An Example".to_string()),
            doi: Some("10.1000/demo.1".to_string()),
            kind: Some("article-journal".to_string()),
            year: Some(2020),
            author: Some("Doe, John; Smith, Jane".to_string()),
        }
    }

    fn citekey() -> Citekey {
        Citekey::parse("doe_example_2020").unwrap()
    }

    #[test]
    fn test_render_substitutes_all_fields() {
        let dir = tempdir().unwrap();
        let note = Note::new(citekey(), fields(), &config(dir.path().into()), "simple").unwrap();

        let rendered = note.render();
        assert!(rendered.contains("# An Example"));
        assert!(rendered.contains("Citekey: doe_example_2020"));
        assert!(rendered.contains("Creator: Doe, John; Smith, Jane"));
        assert!(rendered.contains("Date: 2020"));
        assert!(rendered.contains("DOI: 10.1000/demo.1"));
        assert!(rendered.contains("Type: article-journal"));
        assert!(rendered.contains("by Jane Doe."));
        assert!(rendered.contains("## Summary"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_render_missing_fields_are_blank() {
        let dir = tempdir().unwrap();
        let note = Note::new(
            citekey(),
            NormalizedFields::default(),
            &config(dir.path().into()),
            "simple",
        )
        .unwrap();

        let rendered = note.render();
        assert!(rendered.contains("- Creator: \n"));
        assert!(rendered.contains("- DOI: \n"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_repeated_renders_are_stable() {
        let dir = tempdir().unwrap();
        let note = Note::new(citekey(), fields(), &config(dir.path().into()), "simple").unwrap();
        assert_eq!(note.render(), note.render());
    }

    #[test]
    fn test_unknown_template_aborts() {
        let dir = tempdir().unwrap();
        let result = Note::new(citekey(), fields(), &config(dir.path().into()), "fancy");
        assert!(matches!(result, Err(RefnoteError::TemplateNotFound(_))));
    }

    #[test]
    fn test_user_template_overrides_builtin() {
        let dir = tempdir().unwrap();
        let config = config(dir.path().into());
        fs::create_dir_all(config.templates_dir()).unwrap();
        fs::write(
            config.templates_dir().join("simple.md"),
            "## My own layout for {{citekey}}\n",
        )
        .unwrap();

        let note = Note::new(citekey(), fields(), &config, "simple").unwrap();
        let rendered = note.render();
        assert!(rendered.contains("## My own layout for doe_example_2020"));
        assert!(!rendered.contains("## Summary"));
    }

    #[test]
    fn test_list_templates_merges_and_sorts() {
        let dir = tempdir().unwrap();
        let config = config(dir.path().into());
        fs::create_dir_all(config.templates_dir()).unwrap();
        fs::write(config.templates_dir().join("lecture.md"), "## Lecture\n").unwrap();
        fs::write(config.templates_dir().join("simple.md"), "override\n").unwrap();
        fs::write(config.templates_dir().join("notes.txt"), "ignored\n").unwrap();

        assert_eq!(list_templates(&config), vec!["lecture", "simple"]);
    }

    #[test]
    fn test_list_templates_without_user_dir() {
        let dir = tempdir().unwrap();
        assert_eq!(list_templates(&config(dir.path().into())), vec!["simple"]);
    }
}
