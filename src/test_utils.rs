// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for unit tests: a two-language set and a counting label.

use crate::language::Language;
use crate::observer::Localizable;
use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestLanguage {
    English,
    Russian,
}

impl Language for TestLanguage {
    fn code(&self) -> &'static str {
        match self {
            TestLanguage::English => "en",
            TestLanguage::Russian => "ru",
        }
    }

    fn locale_identifier(&self) -> &str {
        match self {
            TestLanguage::English => "en_US",
            TestLanguage::Russian => "ru_RU",
        }
    }

    fn default_language() -> Self {
        TestLanguage::English
    }

    fn all() -> &'static [Self] {
        &[TestLanguage::English, TestLanguage::Russian]
    }
}

/// A subscriber that counts how often it was asked to localize.
#[derive(Debug, Default)]
pub struct Label {
    calls: Cell<usize>,
}

impl Label {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Localizable for Label {
    fn localize(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}
