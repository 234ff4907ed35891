// SPDX-License-Identifier: MPL-2.0
//! The language capability an application implements for its supported set.
//!
//! A language set is usually a small `Copy` enum. Each value carries a stable
//! code (what gets persisted), a locale identifier, and a resource path that
//! the host's string lookup understands. Exactly one value is the default.
//!
//! ```
//! use relocalize::Language;
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
//!         match self {
//!             AppLanguage::English => "en_US",
//!             AppLanguage::Russian => "ru_RU",
//!         }
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
//! assert_eq!(AppLanguage::from_code("ru"), Some(AppLanguage::Russian));
//! assert_eq!(AppLanguage::Russian.locale().to_string(), "ru-RU");
//! ```

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// A supported display language.
pub trait Language: Copy + Eq + fmt::Debug + 'static {
    /// Stable code persisted by the localizer (e.g. `"en"`). Unique per set.
    fn code(&self) -> &'static str;

    /// Locale identifier such as `"en_US"` or `"en-US"`.
    fn locale_identifier(&self) -> &str;

    /// Key the string lookup uses to find this language's resources.
    ///
    /// Defaults to the language code.
    fn resource_path(&self) -> &str {
        self.code()
    }

    /// Locale derived from [`Language::locale_identifier`].
    ///
    /// Both `_` and `-` separators are accepted. An identifier that does not
    /// parse yields the undetermined locale (`und`).
    fn locale(&self) -> LanguageIdentifier {
        crate::locale::parse_locale(self.locale_identifier()).unwrap_or_default()
    }

    /// The designated default of the set.
    fn default_language() -> Self;

    /// Every supported language, in display order.
    fn all() -> &'static [Self];

    /// Looks up a language by its exact code.
    fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|language| language.code() == code)
    }
}

/// Checks the invariants of a language set: at least one language, unique
/// codes, and a default that belongs to the set.
pub fn validate_language_set<L: Language>() -> Result<()> {
    let all = L::all();
    if all.is_empty() {
        return Err(Error::Language("language set is empty".to_string()));
    }

    let mut seen = HashSet::with_capacity(all.len());
    for language in all {
        if !seen.insert(language.code()) {
            return Err(Error::Language(format!(
                "duplicate language code '{}'",
                language.code()
            )));
        }
    }

    let default = L::default_language();
    if !all.contains(&default) {
        return Err(Error::Language(format!(
            "default language '{}' is not part of the set",
            default.code()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestLanguage;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Duplicated {
        First,
        Second,
    }

    impl Language for Duplicated {
        fn code(&self) -> &'static str {
            "xx"
        }

        fn locale_identifier(&self) -> &str {
            "xx"
        }

        fn default_language() -> Self {
            Duplicated::First
        }

        fn all() -> &'static [Self] {
            &[Duplicated::First, Duplicated::Second]
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Orphaned {
        Listed,
        Hidden,
    }

    impl Language for Orphaned {
        fn code(&self) -> &'static str {
            match self {
                Orphaned::Listed => "listed",
                Orphaned::Hidden => "hidden",
            }
        }

        fn locale_identifier(&self) -> &str {
            "und"
        }

        fn default_language() -> Self {
            Orphaned::Hidden
        }

        fn all() -> &'static [Self] {
            &[Orphaned::Listed]
        }
    }

    #[test]
    fn from_code_finds_known_languages() {
        assert_eq!(TestLanguage::from_code("en"), Some(TestLanguage::English));
        assert_eq!(TestLanguage::from_code("ru"), Some(TestLanguage::Russian));
    }

    #[test]
    fn from_code_rejects_unknown_and_case_variants() {
        assert_eq!(TestLanguage::from_code("fr"), None);
        assert_eq!(TestLanguage::from_code("EN"), None);
        assert_eq!(TestLanguage::from_code(""), None);
    }

    #[test]
    fn locale_accepts_underscore_identifiers() {
        let locale = TestLanguage::Russian.locale();
        assert_eq!(locale.to_string(), "ru-RU");
        assert_eq!(locale.language.as_str(), "ru");
    }

    #[test]
    fn resource_path_defaults_to_code() {
        assert_eq!(TestLanguage::English.resource_path(), "en");
    }

    #[test]
    fn valid_set_passes_validation() {
        assert!(validate_language_set::<TestLanguage>().is_ok());
    }

    #[test]
    fn duplicate_codes_fail_validation() {
        let err = validate_language_set::<Duplicated>().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn default_outside_set_fails_validation() {
        let err = validate_language_set::<Orphaned>().unwrap_err();
        assert!(err.to_string().contains("hidden"));
    }
}
