// SPDX-License-Identifier: MPL-2.0
//! Key-value persistence for the current language.
//!
//! The localizer only needs to read and write one string under one key, so
//! the contract is deliberately small. Two implementations ship with the
//! crate: an in-memory map and a TOML settings file.

use crate::config::{DEFAULT_APP_NAME, PREFERENCES_TABLE};
use crate::error::{Error, Result};
use crate::paths;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use toml::{Table, Value};
use tracing::warn;

/// A string key-value store the localizer persists into.
pub trait PreferenceStore {
    /// Reads the value stored under `key`. Unreadable storage reads as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Process-local store. Values are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the store with `key` already set to `value`.
    #[must_use]
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Removes `key`, returning its previous value.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.values.borrow_mut().remove(key)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by the `[preferences]` table of a TOML settings file.
///
/// The file is read on every `get`, so edits made by other writers are picked
/// up immediately. Tables other than `[preferences]` are preserved on write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the default config directory for the default app name.
    ///
    /// Returns `None` if the config directory cannot be determined.
    #[must_use]
    pub fn in_config_dir() -> Option<Self> {
        Self::with_override(DEFAULT_APP_NAME, None)
    }

    /// Store in the config directory resolved for `app_name`.
    ///
    /// See [`paths`] for the resolution order.
    #[must_use]
    pub fn with_override(app_name: &str, base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_settings_path_with_override(app_name, base_dir).map(Self::new)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_table(&self) -> Result<Table> {
        if !self.path.exists() {
            return Ok(Table::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    fn save_table(&self, table: &Table) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(table)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for TomlFileStore {
    fn get(&self, key: &str) -> Option<String> {
        let table = match self.load_table() {
            Ok(table) => table,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "failed to read preferences");
                return None;
            }
        };

        table
            .get(PREFERENCES_TABLE)
            .and_then(|preferences| preferences.get(key))
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // An unparseable file is reported rather than overwritten.
        let mut table = self.load_table()?;

        let preferences = table
            .entry(PREFERENCES_TABLE)
            .or_insert_with(|| Value::Table(Table::new()));
        let Value::Table(preferences) = preferences else {
            return Err(Error::Config(format!(
                "'{}' in {} is not a table",
                PREFERENCES_TABLE,
                self.path.display()
            )));
        };
        preferences.insert(key.to_string(), Value::String(value.to_string()));

        self.save_table(&table)
    }
}
