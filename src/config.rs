use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub notes: NotesConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "OAI".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NotesConfig {
    /// Directory the append operation targets.
    pub notes_dir: String,
    /// Directory where the header file is created when the note file is
    /// missing. Deliberately distinct from `notes_dir`; see DESIGN.md.
    pub fallback_dir: String,
    pub note_file: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            notes_dir: "./obsidian".to_string(),
            fallback_dir: ".".to_string(),
            note_file: "oai.md".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context("Failed to read config file. Make sure config.toml exists.")?;

        let mut config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to built-in
    /// defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            log::info!("No config file found, using defaults");
            let mut config = Config::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("OAI_NOTES_DIR") {
            self.notes.notes_dir = dir;
        }
    }

    /// Create output directories if they don't exist
    pub fn ensure_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.notes.notes_dir)
            .context("Failed to create notes directory")?;
        fs::create_dir_all(&self.notes.fallback_dir)
            .context("Failed to create fallback directory")?;
        Ok(())
    }

    /// Full path of the note file the append operation writes to.
    pub fn note_path(&self) -> PathBuf {
        PathBuf::from(&self.notes.notes_dir).join(&self.notes.note_file)
    }

    /// Path where the header file lands when the note file is missing.
    pub fn fallback_path(&self) -> PathBuf {
        PathBuf::from(&self.notes.fallback_dir).join(&self.notes.note_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parsing() {
        let toml_str = r#"
            [server]
            name = "OAI"

            [notes]
            notes_dir = "./output/obsidian"
            fallback_dir = "."
            note_file = "oai.md"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.name, "OAI");
        assert_eq!(config.notes.notes_dir, "./output/obsidian");
        assert_eq!(config.note_path(), PathBuf::from("./output/obsidian/oai.md"));
        assert_eq!(config.fallback_path(), PathBuf::from("./oai.md"));
    }

    #[test]
    fn test_config_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.name, "OAI");
        assert_eq!(config.notes.note_file, "oai.md");
        assert_eq!(config.notes.fallback_dir, ".");
    }

    #[test]
    fn test_load_reads_file_and_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
            [notes]
            notes_dir = "./from-file"
        "#,
        )
        .unwrap();

        // Env vars are process-global; other tests in this module parse TOML
        // strings directly and never read the environment.
        std::env::set_var("OAI_NOTES_DIR", "/tmp/from-env");
        let config = Config::load(&config_path).unwrap();
        std::env::remove_var("OAI_NOTES_DIR");

        assert_eq!(config.notes.notes_dir, "/tmp/from-env");
        assert_eq!(config.notes.note_file, "oai.md");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("config.toml")).unwrap();
        assert_eq!(config.server.name, "OAI");
        assert_eq!(config.notes.notes_dir, "./obsidian");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let toml_str = r#"
            [notes]
            notes_dir = "/tmp/notes"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.notes.notes_dir, "/tmp/notes");
        assert_eq!(config.notes.note_file, "oai.md");
    }
}
