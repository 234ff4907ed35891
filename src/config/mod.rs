// SPDX-License-Identifier: MPL-2.0
//! Localizer configuration, read from the `[localizer]` table of a TOML file.
//!
//! Every field is optional in the file; missing fields take the values from
//! [`defaults`]. Hosts that do not want a config file can build
//! [`LocalizerConfig`] in code or use [`LocalizerConfig::default`].
//!
//! ```toml
//! [localizer]
//! key = "app.localizer.language"
//! app_name = "MyApp"
//! config_dir = "/opt/myapp/config"
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::paths;
use crate::store::TomlFileStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for a [`crate::Localizer`] backed by the file store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalizerConfig {
    /// Preference key holding the current language code.
    #[serde(default = "default_key")]
    pub key: String,

    /// Application name used for the platform config directory.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Explicit config directory, bypassing environment and platform lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_dir: Option<PathBuf>,
}

impl Default for LocalizerConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            app_name: default_app_name(),
            config_dir: None,
        }
    }
}

impl LocalizerConfig {
    /// Settings file the store for this configuration reads and writes.
    #[must_use]
    pub fn settings_path(&self) -> Option<PathBuf> {
        paths::get_settings_path_with_override(&self.app_name, self.config_dir.clone())
    }

    /// File store for this configuration, if a config directory resolves.
    #[must_use]
    pub fn store(&self) -> Option<TomlFileStore> {
        self.settings_path().map(TomlFileStore::new)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    localizer: LocalizerConfig,
}

fn default_key() -> String {
    DEFAULT_LANGUAGE_KEY.to_string()
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

/// Parses the `[localizer]` table out of TOML text.
pub fn from_toml_str(content: &str) -> Result<LocalizerConfig> {
    let file: ConfigFile = toml::from_str(content)?;
    Ok(file.localizer)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<LocalizerConfig> {
    let content = fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// Saves configuration to a specific path under a `[localizer]` table.
pub fn save_to_path(config: &LocalizerConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = ConfigFile {
        localizer: config.clone(),
    };
    let content = toml::to_string_pretty(&file)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_default_key_and_app_name() {
        let config = LocalizerConfig::default();
        assert_eq!(config.key, DEFAULT_LANGUAGE_KEY);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert!(config.config_dir.is_none());
    }

    #[test]
    fn missing_table_yields_defaults() {
        let config = from_toml_str("[other]\nvalue = 1\n").expect("should parse");
        assert_eq!(config, LocalizerConfig::default());
    }

    #[test]
    fn partial_table_fills_remaining_defaults() {
        let config = from_toml_str("[localizer]\nkey = \"custom.key\"\n").expect("should parse");
        assert_eq!(config.key, "custom.key");
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = from_toml_str("not = valid = toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("localizer.toml");
        let config = LocalizerConfig {
            key: "my.language".to_string(),
            app_name: "MyApp".to_string(),
            config_dir: Some(temp_dir.path().to_path_buf()),
        };

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn settings_path_honors_config_dir() {
        let config = LocalizerConfig {
            config_dir: Some(PathBuf::from("/tmp/relocalize")),
            ..LocalizerConfig::default()
        };
        assert_eq!(
            config.settings_path(),
            Some(PathBuf::from("/tmp/relocalize").join(SETTINGS_FILE))
        );
    }
}
