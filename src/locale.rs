// SPDX-License-Identifier: MPL-2.0
//! Access to the host's current locale and matching it against a language set.

use crate::language::Language;
use unic_langid::LanguageIdentifier;

/// Read-only view of the host's current language/region.
pub trait LocaleProvider {
    /// Returns the current locale tag (e.g. `"fr-FR"`), if the host reports one.
    fn current_locale(&self) -> Option<String>;
}

/// Locale reported by the operating system through `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleProvider for SystemLocale {
    fn current_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A locale pinned by the host, independent of the operating system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocale(Option<String>);

impl FixedLocale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    /// A provider that never reports a locale.
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }
}

impl LocaleProvider for FixedLocale {
    fn current_locale(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Parses a locale tag, tolerating POSIX forms like `"ru_RU.UTF-8"` or
/// `"de_DE@euro"`.
pub fn parse_locale(tag: &str) -> Option<LanguageIdentifier> {
    let tag = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('_', "-");
    if tag.is_empty() {
        return None;
    }
    tag.parse::<LanguageIdentifier>().ok()
}

/// Matches a locale tag against the codes of `L`.
///
/// The tag is first compared verbatim, then by its primary language subtag,
/// so `"ru-RU"` resolves to a language coded `"ru"`.
pub fn match_language<L: Language>(tag: &str) -> Option<L> {
    if let Some(language) = L::from_code(tag) {
        return Some(language);
    }

    let locale = parse_locale(tag)?;
    let normalized = locale.to_string();
    L::from_code(&normalized).or_else(|| L::from_code(locale.language.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestLanguage;

    #[test]
    fn exact_code_matches() {
        assert_eq!(match_language::<TestLanguage>("ru"), Some(TestLanguage::Russian));
    }

    #[test]
    fn region_tag_falls_back_to_language_subtag() {
        assert_eq!(
            match_language::<TestLanguage>("ru-RU"),
            Some(TestLanguage::Russian)
        );
        assert_eq!(
            match_language::<TestLanguage>("en_GB"),
            Some(TestLanguage::English)
        );
    }

    #[test]
    fn posix_locale_with_encoding_matches() {
        assert_eq!(
            match_language::<TestLanguage>("ru_RU.UTF-8"),
            Some(TestLanguage::Russian)
        );
    }

    #[test]
    fn unknown_language_does_not_match() {
        assert_eq!(match_language::<TestLanguage>("fr"), None);
        assert_eq!(match_language::<TestLanguage>("fr-FR"), None);
        assert_eq!(match_language::<TestLanguage>(""), None);
    }

    #[test]
    fn parse_locale_normalizes_case_and_separators() {
        let locale = parse_locale("EN_us").expect("should parse");
        assert_eq!(locale.to_string(), "en-US");
    }

    #[test]
    fn parse_locale_rejects_garbage() {
        assert!(parse_locale("not a locale").is_none());
        assert!(parse_locale(".UTF-8").is_none());
    }

    #[test]
    fn fixed_locale_reports_its_tag() {
        assert_eq!(FixedLocale::new("fr").current_locale().as_deref(), Some("fr"));
        assert_eq!(FixedLocale::none().current_locale(), None);
    }
}
