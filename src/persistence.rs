use crate::constants::CONFIG_FILE_NAME;
use crate::types::Config;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub struct PersistenceManager {
    config_dir: PathBuf,
}

impl PersistenceManager {
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "tempconv")
            .context("Failed to determine config directory")?;

        Self::with_dir(project_dirs.config_dir())
    }

    /// Use an explicit config directory instead of the platform default
    pub fn with_dir(config_dir: impl AsRef<Path>) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        Ok(PersistenceManager { config_dir })
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Load the stored preferences. A missing or malformed file yields defaults.
    pub fn load_config(&self) -> Result<Config> {
        let config_path = self.config_path();

        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Config = serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse config file: {}. Using defaults.", e);
            Config::default()
        });

        Ok(config)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(self.config_path(), content).context("Failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_defaults_to_dark() {
        let dir = TempDir::new().unwrap();
        let persistence = PersistenceManager::with_dir(dir.path()).unwrap();
        assert!(persistence.load_config().unwrap().dark_mode);
    }

    #[test]
    fn test_malformed_config_defaults_to_dark() {
        let dir = TempDir::new().unwrap();
        let persistence = PersistenceManager::with_dir(dir.path()).unwrap();

        for content in ["not json", r#"{"darkMode": "false"}"#, "[]"] {
            fs::write(persistence.config_path(), content).unwrap();
            assert!(persistence.load_config().unwrap().dark_mode, "{}", content);
        }
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let persistence = PersistenceManager::with_dir(dir.path()).unwrap();
        persistence.save_config(&Config { dark_mode: false }).unwrap();

        let reopened = PersistenceManager::with_dir(dir.path()).unwrap();
        assert!(!reopened.load_config().unwrap().dark_mode);

        let content = fs::read_to_string(reopened.config_path()).unwrap();
        assert!(content.contains("\"darkMode\": false"));
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let persistence = PersistenceManager::with_dir(&nested).unwrap();
        persistence.save_config(&Config::default()).unwrap();
        assert!(nested.join(CONFIG_FILE_NAME).exists());
    }
}
