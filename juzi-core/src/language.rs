//! Language selection for segmentation and tokenization

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Languages with dedicated segmentation and tokenization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Chinese: pattern-based sentence segmentation, jieba word segmentation
    Chinese,
    /// English: UAX #29 sentence and word boundaries
    English,
}

impl Language {
    /// ISO 639-1 language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
        }
    }

    /// All supported languages
    pub fn all() -> &'static [Language] {
        &[Language::Chinese, Language::English]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Chinese => write!(f, "chinese"),
            Language::English => write!(f, "english"),
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chinese" | "zh" => Ok(Language::Chinese),
            "english" | "en" => Ok(Language::English),
            other => Err(Error::InvalidLanguage(other.to_string())),
        }
    }
}
