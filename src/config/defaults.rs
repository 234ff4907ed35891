// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the localizer configuration.

// ==========================================================================
// Persistence Defaults
// ==========================================================================

/// Key under which the current language code is persisted.
pub const DEFAULT_LANGUAGE_KEY: &str = "app.localizer.language";

/// Application name appended to the platform config directory.
pub const DEFAULT_APP_NAME: &str = "Relocalize";

/// File name of the TOML settings file written by the file store.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Table inside the settings file that holds persisted preferences.
pub const PREFERENCES_TABLE: &str = "preferences";
