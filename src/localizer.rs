// SPDX-License-Identifier: MPL-2.0
//! Current-language resolution and runtime language switching.
//!
//! [`Localizer`] owns the preference key, the store it persists into, the
//! locale provider it falls back to, and the [`ObserverHub`] of subscribers.
//!
//! Resolution order for [`Localizer::current_language`]:
//! 1. the persisted code, if it names a known language
//! 2. the host locale, matched by full tag and then by language subtag
//! 3. [`Language::default_language`]
//!
//! [`Localizer::refresh`] persists the new code, runs the on-change hook once,
//! then broadcasts to every live subscriber, all before it returns.
//!
//! ```
//! use relocalize::{Language, Localizable, Localizer, MemoryStore};
//! use std::cell::RefCell;
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
//! struct Title {
//!     text: RefCell<String>,
//!     active: Rc<RefCell<AppLanguage>>,
//! }
//!
//! impl Localizable for Title {
//!     fn localize(&self) {
//!         let text = match *self.active.borrow() {
//!             AppLanguage::English => "Settings",
//!             AppLanguage::Russian => "Настройки",
//!         };
//!         *self.text.borrow_mut() = text.to_string();
//!     }
//! }
//!
//! let active = Rc::new(RefCell::new(AppLanguage::English));
//! let hook_target = Rc::clone(&active);
//! let localizer = Localizer::new(MemoryStore::new(), move |language: AppLanguage| {
//!     *hook_target.borrow_mut() = language;
//! });
//!
//! let title = Rc::new(Title {
//!     text: RefCell::new(String::new()),
//!     active: Rc::clone(&active),
//! });
//! localizer.add_localizable(&title);
//! assert_eq!(*title.text.borrow(), "Settings");
//!
//! localizer.refresh(AppLanguage::Russian);
//! assert_eq!(*title.text.borrow(), "Настройки");
//! assert_eq!(localizer.current_language(), AppLanguage::Russian);
//! ```

use crate::config::{LocalizerConfig, DEFAULT_LANGUAGE_KEY};
use crate::error::{Error, Result};
use crate::language::{validate_language_set, Language};
use crate::locale::{match_language, LocaleProvider, SystemLocale};
use crate::observer::{Localizable, ObserverHub, SubscriptionId};
use crate::store::PreferenceStore;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, warn};

type ChangeHook<L> = Box<dyn Fn(L)>;

/// Resolves, persists and broadcasts the current language of type `L`.
pub struct Localizer<L: Language> {
    key: String,
    store: Box<dyn PreferenceStore>,
    locale: Box<dyn LocaleProvider>,
    hub: ObserverHub,
    on_change: ChangeHook<L>,
}

impl<L: Language> fmt::Debug for Localizer<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localizer")
            .field("key", &self.key)
            .field("hub", &self.hub)
            .finish_non_exhaustive()
    }
}

impl<L: Language> Localizer<L> {
    /// Creates a localizer persisting under [`DEFAULT_LANGUAGE_KEY`] and
    /// falling back to the operating system locale.
    ///
    /// `on_change` runs once per [`Localizer::refresh`], before subscribers
    /// are refreshed, so it can switch whatever the subscribers' string
    /// lookups read from.
    ///
    /// An invalid language set (see [`validate_language_set`]) is logged
    /// here; [`Localizer::from_config`] rejects it instead.
    pub fn new(store: impl PreferenceStore + 'static, on_change: impl Fn(L) + 'static) -> Self {
        if let Err(error) = validate_language_set::<L>() {
            warn!(%error, "language set is invalid, resolution may not round-trip");
        }

        Self {
            key: DEFAULT_LANGUAGE_KEY.to_string(),
            store: Box::new(store),
            locale: Box::new(SystemLocale),
            hub: ObserverHub::new(),
            on_change: Box::new(on_change),
        }
    }

    /// Creates a localizer backed by the settings file described by `config`.
    ///
    /// Fails when the language set of `L` is invalid or no config directory
    /// resolves.
    pub fn from_config(config: &LocalizerConfig, on_change: impl Fn(L) + 'static) -> Result<Self> {
        validate_language_set::<L>()?;
        let store = config.store().ok_or_else(|| {
            Error::Config("unable to determine the config directory".to_string())
        })?;
        Ok(Self::new(store, on_change).with_key(config.key.clone()))
    }

    /// Uses `key` instead of [`DEFAULT_LANGUAGE_KEY`].
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Replaces the operating system locale with `provider`.
    #[must_use]
    pub fn with_locale_provider(mut self, provider: impl LocaleProvider + 'static) -> Self {
        self.locale = Box::new(provider);
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolves the current language. Never fails.
    ///
    /// The store is consulted on every call. A persisted value that names no
    /// known language is treated as absent.
    #[must_use]
    pub fn current_language(&self) -> L {
        if let Some(code) = self.store.get(&self.key) {
            if let Some(language) = L::from_code(&code) {
                return language;
            }
            debug!(key = %self.key, code = %code, "ignoring unrecognized persisted language");
        }

        if let Some(tag) = self.locale.current_locale() {
            if let Some(language) = match_language::<L>(&tag) {
                debug!(locale = %tag, code = language.code(), "language resolved from locale");
                return language;
            }
            debug!(locale = %tag, "locale matches no supported language");
        }

        L::default_language()
    }

    /// Persists `language`, runs the on-change hook, then refreshes every
    /// live subscriber in registration order.
    ///
    /// The broadcast is unconditional: refreshing to the language that is
    /// already current still notifies everyone. A store failure is logged
    /// and does not stop the hook or the broadcast.
    pub fn refresh(&self, language: L) {
        if let Err(error) = self.store.set(&self.key, language.code()) {
            warn!(key = %self.key, code = language.code(), %error, "failed to persist language");
        }

        (self.on_change)(language);

        let notified = self.hub.broadcast();
        debug!(code = language.code(), notified, "language refreshed");
    }

    /// Registers `callback` for `subscriber`; see [`ObserverHub::add`].
    pub fn add<T, F>(&self, subscriber: &Rc<T>, callback: F) -> SubscriptionId
    where
        T: ?Sized + 'static,
        F: Fn(&T) + 'static,
    {
        self.hub.add(subscriber, callback)
    }

    /// Registers a [`Localizable`]; see [`ObserverHub::add_localizable`].
    pub fn add_localizable<T>(&self, subscriber: &Rc<T>) -> SubscriptionId
    where
        T: Localizable + ?Sized + 'static,
    {
        self.hub.add_localizable(subscriber)
    }

    /// Refreshes subscribers without changing the language.
    pub fn broadcast(&self) -> usize {
        self.hub.broadcast()
    }

    #[must_use]
    pub fn hub(&self) -> &ObserverHub {
        &self.hub
    }
}
