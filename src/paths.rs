// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution for the file-backed preference store.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions
//! 2. **Environment variable** (`RELOCALIZE_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate, with the application name appended
//!
//! The explicit override has highest priority because it's the most specific.

use crate::config::SETTINGS_FILE;
use std::path::PathBuf;

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "RELOCALIZE_CONFIG_DIR";

/// Returns the config directory for `app_name`.
///
/// - Linux: `~/.config/<app_name>/`
/// - macOS: `~/Library/Application Support/<app_name>/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\<app_name>\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_config_dir(app_name: &str) -> Option<PathBuf> {
    get_config_dir_with_override(app_name, None)
}

/// Returns the config directory with an optional override.
pub fn get_config_dir_with_override(
    app_name: &str,
    override_path: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(app_name);
        path
    })
}

/// Returns the settings file path inside the resolved config directory.
pub fn get_settings_path_with_override(
    app_name: &str,
    override_path: Option<PathBuf>,
) -> Option<PathBuf> {
    get_config_dir_with_override(app_name, override_path).map(|mut path| {
        path.push(SETTINGS_FILE);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const APP_NAME: &str = "RelocalizeTest";

    #[test]
    fn config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_config_dir(APP_NAME) {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "config dir should contain app name"
            );
        }
        // If dirs::config_dir() returns None (rare), the test passes silently
    }

    #[test]
    fn override_path_takes_precedence() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_config_dir_with_override(APP_NAME, Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_config_dir(APP_NAME);
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_config_dir(APP_NAME) {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_config_dir_with_override(APP_NAME, Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn settings_path_ends_with_settings_file() {
        let path = get_settings_path_with_override(APP_NAME, Some(PathBuf::from("/base")))
            .expect("override always resolves");
        assert_eq!(path, PathBuf::from("/base").join(SETTINGS_FILE));
    }
}
