//! Client languages used by localized icon folders.

use std::str::FromStr;

use crate::Error;

/// Game client language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    Japanese,
    #[default]
    English,
    German,
    French,
}

/// Built-in two-letter language folder table.
pub static LANGUAGES: &[(&str, Language)] = &[
    ("ja", Language::Japanese),
    ("en", Language::English),
    ("de", Language::German),
    ("fr", Language::French),
];

impl Language {
    /// Get the two-letter folder code of this language.
    pub const fn code(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LANGUAGES
            .iter()
            .find(|(code, _)| *code == s)
            .map(|&(_, language)| language)
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
