use crate::error::{Result, TodozError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "todoz.json";
const DEFAULT_FILE_NAME: &str = "todo.txt";
const FILE_NAME_KEY: &str = "file-name";

/// Configuration for a scope, stored as `todoz.json` in the scope directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Name of the task file inside the scope directory
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TodozConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            FILE_NAME_KEY => Ok(&self.file_name),
            other => Err(unknown_key(other)),
        }
    }

    /// The task file must stay inside the scope directory, so `file-name`
    /// takes a bare file name: no separators, not `.` or `..`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            FILE_NAME_KEY => {
                let value = value.trim();
                if matches!(value, "" | "." | "..") || value.contains(['/', '\\']) {
                    return Err(TodozError::Config(format!(
                        "file-name must be a plain file name, got '{}'",
                        value
                    )));
                }
                self.file_name = value.to_string();
                Ok(())
            }
            other => Err(unknown_key(other)),
        }
    }
}

fn unknown_key(key: &str) -> TodozError {
    TodozError::Config(format!(
        "'{}' is not a setting (try {})",
        key, FILE_NAME_KEY
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TodozConfig::default();
        assert_eq!(config.file_name, "todo.txt");
    }

    #[test]
    fn test_set_file_name() {
        let mut config = TodozConfig::default();
        config.set("file-name", " chores.txt ").unwrap();
        assert_eq!(config.get("file-name").unwrap(), "chores.txt");
        assert!(matches!(config.get("editor"), Err(TodozError::Config(_))));
    }

    #[test]
    fn test_set_rejects_paths_and_blanks() {
        let mut config = TodozConfig::default();
        assert!(config.set("file-name", "../escape.txt").is_err());
        assert!(config.set("file-name", "   ").is_err());
        assert!(config.set("file-name", ".").is_err());
        assert!(config.set("file-name", " .. ").is_err());
        assert!(config.set("file-name", "dir\\todo.txt").is_err());
        assert!(config.set("editor", "vim").is_err());
        assert_eq!(config, TodozConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = TodozConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, TodozConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("scope");

        let mut config = TodozConfig::default();
        config.set("file-name", "list.txt").unwrap();
        config.save(&dir).unwrap();

        let loaded = TodozConfig::load(&dir).unwrap();
        assert_eq!(loaded.file_name, "list.txt");
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let loaded = TodozConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, TodozConfig::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        let err = TodozConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, TodozError::Serialization(_)));
    }
}
