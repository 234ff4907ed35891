// SPDX-License-Identifier: MPL-2.0
//! `relocalize` switches an application's display language at runtime and
//! refreshes every live UI element that asked to be kept in sync.
//!
//! - [`Localizer`] resolves the current language (persisted preference, then
//!   host locale, then default), persists changes and broadcasts them.
//! - [`ObserverHub`] holds subscribers weakly and calls them in registration
//!   order; dropped subscribers simply stop being called.
//! - [`Language`] and [`Localizable`] are the two capabilities the host
//!   implements.
//!
//! Everything is single-threaded and synchronous: `refresh` returns only
//! after every live subscriber has re-rendered.

#![doc(html_root_url = "https://docs.rs/relocalize/0.1.0")]

pub mod config;
pub mod error;
pub mod i18n;
pub mod language;
pub mod locale;
pub mod localizer;
pub mod observer;
pub mod paths;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::LocalizerConfig;
pub use error::{Error, Result};
pub use language::{validate_language_set, Language};
pub use locale::{FixedLocale, LocaleProvider, SystemLocale};
pub use localizer::Localizer;
pub use observer::{Localizable, ObserverHub, SubscriptionId};
pub use store::{MemoryStore, PreferenceStore, TomlFileStore};
