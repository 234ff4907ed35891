// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Errors surfaced by the collaborators around the localizer.
///
/// Language resolution and broadcasting never fail; these variants only come
/// back from preference stores, configuration loading, language-set
/// validation and translation sources.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Language Error: {0}")]
    Language(String),
    #[error("Resource Error: {0}")]
    Resource(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
