//! Settings management for adapter tooling.
//!
//! Stores settings in JSON format at `~/.nioadapter/config.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::{AdapterKind, BindPolicy};
use crate::error::{Error, Result};

/// Settings stored in JSON format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// What happens when a NIO is bound to a port that already has one.
    #[serde(default, rename = "bindPolicy")]
    pub bind_policy: BindPolicy,

    /// Adapter model used when a command does not name one.
    #[serde(default, rename = "defaultKind")]
    pub default_kind: Option<AdapterKind>,
}

/// Configuration store for reading and writing settings.
///
/// Handles reading and writing `~/.nioadapter/config.json`.
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a new config store with the default path.
    ///
    /// Default path: `~/.nioadapter/config.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        let config_path = home.join(".nioadapter").join("config.json");
        Ok(Self { config_path })
    }

    /// Create a config store with a custom path.
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub async fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub async fn save(&self, config: &Config) -> Result<()> {
        if let Some(config_dir) = self.config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir).await.map_err(|e| {
                    Error::Config(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(config)?;

        // Write to a temp file then rename so readers never see a partial file
        let temp_path = self.config_path.with_extension("json.tmp");

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to create temp config file: {}", e)))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| Error::Config(format!("Failed to write config: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| Error::Config(format!("Failed to sync config: {}", e)))?;

        fs::rename(&temp_path, &self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to rename config file: {}", e)))?;

        Ok(())
    }

    /// Get the NIO binding policy.
    pub async fn get_bind_policy(&self) -> Result<BindPolicy> {
        Ok(self.load().await?.bind_policy)
    }

    /// Set the NIO binding policy.
    pub async fn set_bind_policy(&self, policy: BindPolicy) -> Result<()> {
        let mut config = self.load().await?;
        config.bind_policy = policy;
        self.save(&config).await
    }

    /// Get the default adapter model.
    pub async fn get_default_kind(&self) -> Result<Option<AdapterKind>> {
        Ok(self.load().await?.default_kind)
    }

    /// Set or clear the default adapter model.
    pub async fn set_default_kind(&self, kind: Option<AdapterKind>) -> Result<()> {
        let mut config = self.load().await?;
        config.default_kind = kind;
        self.save(&config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_store() -> (ConfigStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        (ConfigStore::with_path(path), dir)
    }

    #[tokio::test]
    async fn test_load_nonexistent() {
        let (store, _dir) = test_store();
        let config = store.load().await.unwrap();
        assert_eq!(config.bind_policy, BindPolicy::Replace);
        assert!(config.default_kind.is_none());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (store, _dir) = test_store();

        let config = Config {
            bind_policy: BindPolicy::Reject,
            default_kind: Some(AdapterKind::C2600Mb1Fe),
        };
        store.save(&config).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_settings_accessors() {
        let (store, _dir) = test_store();

        store.set_bind_policy(BindPolicy::Reject).await.unwrap();
        store.set_default_kind(Some(AdapterKind::Nm4T)).await.unwrap();
        assert_eq!(store.get_bind_policy().await.unwrap(), BindPolicy::Reject);
        assert_eq!(store.get_default_kind().await.unwrap(), Some(AdapterKind::Nm4T));

        store.set_default_kind(None).await.unwrap();
        assert_eq!(store.get_default_kind().await.unwrap(), None);
        assert_eq!(store.get_bind_policy().await.unwrap(), BindPolicy::Reject);
    }

    #[tokio::test]
    async fn test_file_format() {
        let (store, _dir) = test_store();
        tokio::fs::create_dir_all(store.config_path().parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(
            store.config_path(),
            r#"{"bindPolicy": "reject", "defaultKind": "C1700-MB-1FE"}"#,
        )
        .await
        .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.bind_policy, BindPolicy::Reject);
        assert_eq!(config.default_kind, Some(AdapterKind::C1700Mb1Fe));
    }

    #[tokio::test]
    async fn test_invalid_kind_is_config_error() {
        let (store, _dir) = test_store();
        tokio::fs::create_dir_all(store.config_path().parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(store.config_path(), r#"{"defaultKind": "NM-99X"}"#)
            .await
            .unwrap();

        assert!(matches!(store.load().await, Err(Error::Config(_))));
    }
}
