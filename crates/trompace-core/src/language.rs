use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Language codes accepted by the CE for `language` and `inLanguage`.
pub const SUPPORTED_LANGUAGES: [&str; 6] = ["en", "es", "ca", "nl", "de", "fr"];

/// A metadata language supported by the CE.
///
/// Rendered as a bare GraphQL enum value (`language: en`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Es,
    Ca,
    Nl,
    De,
    Fr,
}

impl Language {
    /// The lower-case code the CE schema uses for this language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Ca => "ca",
            Self::Nl => "nl",
            Self::De => "de",
            Self::Fr => "fr",
        }
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            "ca" => Ok(Self::Ca),
            "nl" => Ok(Self::Nl),
            "de" => Ok(Self::De),
            "fr" => Ok(Self::Fr),
            _ => Err(ValidationError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
