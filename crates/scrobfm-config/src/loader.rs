//! Configuration loading and persistence with atomic file operations.

use crate::schema::Config;
use scrobfm_common::{Result, ScrobError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader with atomic file operations.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader for the given TOML file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this loader reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the configuration from file.
    pub async fn load(&self) -> Result<Config> {
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            ScrobError::Config(format!("cannot read {}: {err}", self.path.display()))
        })?;

        let config: Config = toml::from_str(&body)
            .map_err(|err| ScrobError::Serialization(err.to_string()))?;
        config.validate()?;

        debug!(path = %self.path.display(), "configuration loaded");
        Ok(config)
    }

    /// Loads the configuration, falling back to defaults when the file
    /// does not exist. The fallback is not validated here: defaults lack
    /// credentials, which env overrides may still supply.
    pub async fn load_or_default(&self) -> Result<Config> {
        if tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            self.load().await
        } else {
            debug!(path = %self.path.display(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }

    /// Saves the configuration to file atomically: the TOML body is
    /// written to a temporary file in the same directory, then renamed
    /// over the target.
    pub async fn save(&self, config: &Config) -> Result<()> {
        let body = toml::to_string_pretty(config)
            .map_err(|err| ScrobError::Serialization(err.to_string()))?;

        let directory = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut file = tempfile::NamedTempFile::new_in(directory)?;
        file.write_all(body.as_bytes())?;
        file.persist(&self.path).map_err(|err| ScrobError::Io(err.error))?;

        debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrobfm_common::test_utils::create_temp_dir;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.lastfm.api_key = "0123456789abcdef".to_string();
        config.lastfm.user = "test_user".to_string();
        config
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = create_temp_dir();
        let loader = ConfigLoader::new(dir.path().join("scrobfm.toml"));

        let config = valid_config();
        loader.save(&config).await.unwrap();
        let loaded = loader.load().await.unwrap();

        assert_eq!(loaded.lastfm.user, "test_user");
        assert_eq!(loaded.data.page_size, config.data.page_size);
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let dir = create_temp_dir();
        let loader = ConfigLoader::new(dir.path().join("missing.toml"));
        assert!(loader.load().await.is_err());
    }

    #[tokio::test]
    async fn test_load_or_default_falls_back() {
        let dir = create_temp_dir();
        let loader = ConfigLoader::new(dir.path().join("missing.toml"));

        let config = loader.load_or_default().await.unwrap();
        assert_eq!(config.data.page_size, Config::default().data.page_size);
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_toml() {
        let dir = create_temp_dir();
        let path = dir.path().join("scrobfm.toml");
        tokio::fs::write(&path, "lastfm = 'not a table'").await.unwrap();

        let loader = ConfigLoader::new(path);
        assert!(loader.load().await.is_err());
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_config() {
        let dir = create_temp_dir();
        let path = dir.path().join("scrobfm.toml");

        let mut config = valid_config();
        config.data.page_size = 0;
        tokio::fs::write(&path, toml::to_string_pretty(&config).unwrap())
            .await
            .unwrap();

        let loader = ConfigLoader::new(path);
        assert!(loader.load().await.is_err());
    }
}
