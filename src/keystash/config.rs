use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "keystash.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// What `update` does when the new values belong to another item class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassChangePolicy {
    /// Drop the discriminator from the replacement set and update the rest.
    #[default]
    Strip,
    /// Fail with `InvalidParameters` before calling the vault.
    Reject,
}

/// Store settings, persisted as `keystash.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Access group stamped on items that do not name one.
    pub access_group: Option<String>,

    pub class_change_policy: ClassChangePolicy,
}

impl StoreConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<(), ConfigError> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Set the access group (trimmed; blank clears it)
    pub fn set_access_group(&mut self, group: &str) {
        let group = group.trim();
        self.access_group = (!group.is_empty()).then(|| group.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.access_group, None);
        assert_eq!(config.class_change_policy, ClassChangePolicy::Strip);
    }

    #[test]
    fn test_set_access_group_trims() {
        let mut config = StoreConfig::default();
        config.set_access_group("  team.shared ");
        assert_eq!(config.access_group.as_deref(), Some("team.shared"));

        config.set_access_group("   ");
        assert_eq!(config.access_group, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = StoreConfig::load(dir.path()).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested").join("dir");

        let mut config = StoreConfig::default();
        config.set_access_group("team.shared");
        config.class_change_policy = ClassChangePolicy::Reject;
        config.save(&nested).unwrap();

        let loaded = StoreConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"class_change_policy": "reject"}"#,
        )
        .unwrap();

        let config = StoreConfig::load(dir.path()).unwrap();
        assert_eq!(config.access_group, None);
        assert_eq!(config.class_change_policy, ClassChangePolicy::Reject);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        let result = StoreConfig::load(dir.path());
        assert!(matches!(result, Err(ConfigError::Serialization(_))));
    }
}
