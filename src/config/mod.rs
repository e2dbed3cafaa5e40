use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;
use serde::Deserialize;

const DEFAULT_EXPENSES_FILE: &str = "expenses.csv";
const DEFAULT_TASKS_FILE: &str = "tasks.csv";
const HISTORY_FILE: &str = ".tally_history";

/// Settings read from `config.toml`. Every key is optional.
#[derive(Deserialize, Debug, Default, PartialEq)]
pub(crate) struct Config {
    pub(crate) expenses_file: Option<PathBuf>,
    pub(crate) tasks_file: Option<PathBuf>,
    pub(crate) history_file: Option<PathBuf>,
}

impl Config {
    /// `<config dir>/tally/config.toml`, e.g. `~/.config/tally/config.toml` on Linux
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tally").join("config.toml"))
    }

    /// Load settings from `path`. A missing file gives the defaults.
    pub(crate) fn load_from_file(path: &Path) -> anyhow::Result<Config> {
        if !path.is_file() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub(crate) fn expenses_file(&self) -> PathBuf {
        self.expenses_file.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_EXPENSES_FILE))
    }

    pub(crate) fn tasks_file(&self) -> PathBuf {
        self.tasks_file.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE))
    }

    pub(crate) fn history_file(&self) -> PathBuf {
        match &self.history_file {
            Some(path) => path.clone(),
            None => dirs::home_dir().unwrap_or_default().join(HISTORY_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_file(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.expenses_file(), PathBuf::from("expenses.csv"));
        assert_eq!(config.tasks_file(), PathBuf::from("tasks.csv"));
        assert!(config.history_file().ends_with(".tally_history"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "expenses_file = \"/data/spending.csv\"\nhistory_file = \"/tmp/history\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.expenses_file(), PathBuf::from("/data/spending.csv"));
        assert_eq!(config.tasks_file(), PathBuf::from("tasks.csv"));
        assert_eq!(config.history_file(), PathBuf::from("/tmp/history"));
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "expenses_file = [").unwrap();
        assert!(Config::load_from_file(&path).is_err());
    }
}
