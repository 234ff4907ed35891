// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed string lookup with an explicit active language.
//!
//! The host registers `.ftl` sources per language, either as text or from a
//! `rust-embed` asset folder whose files are named `<resource_path>.ftl`.
//! The catalog keeps the active language as a field instead of hidden global
//! state, so a [`crate::Localizer`] hook can switch it before subscribers
//! re-run their lookups:
//!
//! ```
//! use relocalize::i18n::FluentCatalog;
//! use relocalize::{Language, Localizer, MemoryStore};
//! use std::rc::Rc;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum AppLanguage {
//!     English,
//!     Russian,
//! }
//!
//! impl Language for AppLanguage {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             AppLanguage::English => "en",
//!             AppLanguage::Russian => "ru",
//!         }
//!     }
//!
//!     fn locale_identifier(&self) -> &str {
//!         self.code()
//!     }
//!
//!     fn default_language() -> Self {
//!         AppLanguage::English
//!     }
//!
//!     fn all() -> &'static [Self] {
//!         &[AppLanguage::English, AppLanguage::Russian]
//!     }
//! }
//!
//! let mut catalog = FluentCatalog::new();
//! catalog.add_source(AppLanguage::English, "hello = Hello").unwrap();
//! catalog.add_source(AppLanguage::Russian, "hello = Привет").unwrap();
//! let catalog = Rc::new(catalog);
//!
//! let hook_catalog = Rc::clone(&catalog);
//! let localizer = Localizer::new(MemoryStore::new(), move |language| {
//!     hook_catalog.set_language(language);
//! });
//!
//! localizer.refresh(AppLanguage::Russian);
//! assert_eq!(catalog.tr("hello"), "Привет");
//! ```

use super::lookup::StringLookup;
use crate::error::{Error, Result};
use crate::language::Language;
use crate::locale::match_language;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// Translations for every language of `L`, plus the active language.
pub struct FluentCatalog<L: Language> {
    bundles: HashMap<&'static str, FluentBundle<FluentResource>>,
    active: Cell<L>,
}

impl<L: Language> Default for FluentCatalog<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Language> fmt::Debug for FluentCatalog<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut loaded: Vec<_> = self.bundles.keys().collect();
        loaded.sort();
        f.debug_struct("FluentCatalog")
            .field("loaded", &loaded)
            .field("active", &self.active.get())
            .finish()
    }
}

impl<L: Language> FluentCatalog<L> {
    /// An empty catalog whose active language is the default language.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bundles: HashMap::new(),
            active: Cell::new(L::default_language()),
        }
    }

    /// Adds Fluent source text for `language`.
    ///
    /// Several sources may be added for one language; a message id defined
    /// twice is an error.
    pub fn add_source(&mut self, language: L, source: impl Into<String>) -> Result<()> {
        let resource = FluentResource::try_new(source.into()).map_err(|(_, errors)| {
            Error::Resource(format!(
                "failed to parse resources for '{}': {:?}",
                language.code(),
                errors
            ))
        })?;

        let bundle = self.bundles.entry(language.code()).or_insert_with(|| {
            let mut bundle = FluentBundle::new(vec![language.locale()]);
            bundle.set_use_isolating(false);
            bundle
        });
        bundle.add_resource(resource).map_err(|errors| {
            Error::Resource(format!(
                "conflicting messages for '{}': {:?}",
                language.code(),
                errors
            ))
        })
    }

    /// Loads `<resource_path>.ftl` for every language from an embedded folder.
    ///
    /// Missing or unparseable files are skipped. Returns the number of
    /// languages loaded.
    pub fn add_embedded<A: RustEmbed>(&mut self) -> usize {
        let mut loaded = 0;
        for language in L::all() {
            let file_name = format!("{}.ftl", language.resource_path());
            let Some(file) = A::get(&file_name) else {
                debug!(file = %file_name, "no embedded translations");
                continue;
            };

            let source = String::from_utf8_lossy(file.data.as_ref()).into_owned();
            match self.add_source(*language, source) {
                Ok(()) => loaded += 1,
                Err(error) => warn!(file = %file_name, %error, "skipping translation file"),
            }
        }
        loaded
    }

    /// Switches the language used by [`FluentCatalog::tr`].
    pub fn set_language(&self, language: L) {
        self.active.set(language);
    }

    #[must_use]
    pub fn language(&self) -> L {
        self.active.get()
    }

    /// Whether any source was added for `language`.
    #[must_use]
    pub fn has_language(&self, language: L) -> bool {
        self.bundles.contains_key(language.code())
    }

    /// Formats `key` in the active language.
    ///
    /// Falls back to the default language, then to the key itself.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.tr_in(key, self.active.get())
    }

    /// Formats `key` in `language`, with the same fallbacks as `tr`.
    #[must_use]
    pub fn tr_in(&self, key: &str, language: L) -> String {
        self.resolve(key, language, None)
    }

    /// Formats `key` in the active language with placeables filled from `args`.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &FluentArgs<'_>) -> String {
        self.resolve(key, self.active.get(), Some(args))
    }

    fn resolve(&self, key: &str, language: L, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(value) = self.format(language, key, args) {
            return value;
        }

        let default = L::default_language();
        if language != default {
            if let Some(value) = self.format(default, key, args) {
                debug!(key, code = language.code(), "using default language translation");
                return value;
            }
        }

        debug!(key, code = language.code(), "missing translation");
        key.to_string()
    }

    fn format(&self, language: L, key: &str, args: Option<&FluentArgs<'_>>) -> Option<String> {
        let bundle = self.bundles.get(language.code())?;
        let pattern = bundle.get_message(key)?.value()?;

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            debug!(key, code = language.code(), ?errors, "failed to format message");
            None
        }
    }

    fn language_for_tag(tag: &str) -> Option<L> {
        L::all()
            .iter()
            .copied()
            .find(|language| language.resource_path() == tag)
            .or_else(|| match_language::<L>(tag))
    }
}

impl<L: Language> StringLookup for FluentCatalog<L> {
    fn lookup(&self, key: &str, language: Option<&str>) -> String {
        match language {
            Some(tag) => match Self::language_for_tag(tag) {
                Some(language) => self.tr_in(key, language),
                None => self.tr(key),
            },
            None => self.tr(key),
        }
    }
}
