// SPDX-License-Identifier: MPL-2.0
//! The string lookup contract subscribers re-run after a language change.

/// Resolves a message key to display text.
///
/// `language` overrides the active language when given; it may be a language
/// code, a resource path, or a locale tag. Implementations return the key
/// itself (or another host-defined fallback) when no translation exists.
pub trait StringLookup {
    fn lookup(&self, key: &str, language: Option<&str>) -> String;
}

impl<F> StringLookup for F
where
    F: Fn(&str, Option<&str>) -> String,
{
    fn lookup(&self, key: &str, language: Option<&str>) -> String {
        self(key, language)
    }
}
