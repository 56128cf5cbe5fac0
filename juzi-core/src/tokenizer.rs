//! Word tokenization for segmented sentences
//!
//! Chinese tokenization delegates to jieba; English tokenization uses UAX #29
//! word boundaries, keeping punctuation runs as their own tokens so the
//! no-filter path still counts them. The jieba dictionary load is the
//! expensive part, so a [`Tokenizer`] is built once and reused across
//! sentences and files.

use jieba_rs::Jieba;
use unicode_segmentation::UnicodeSegmentation;

use crate::language::Language;

/// Word tokenizer over both supported languages.
pub struct Tokenizer {
    jieba: Jieba,
}

impl Tokenizer {
    /// Creates a tokenizer with the default jieba dictionary.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }

    /// Splits one sentence into word tokens for `language`.
    pub fn tokenize<'a>(&self, language: Language, sentence: &'a str) -> Vec<&'a str> {
        match language {
            Language::Chinese => self
                .jieba
                .cut(sentence, true)
                .into_iter()
                .filter(|t| !t.trim().is_empty())
                .collect(),
            Language::English => sentence
                .split_word_bounds()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a token survives the ignore-punctuation filter: non-empty and
/// every character alphanumeric.
pub fn is_alphanumeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
