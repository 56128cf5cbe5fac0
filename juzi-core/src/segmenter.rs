//! Sentence segmentation for Chinese and English text
//!
//! Chinese segmentation is pattern-based: the [`hanzi::SENTENCE`] pattern is
//! compiled once per process and every call scans for all leftmost
//! non-overlapping matches. This is deliberately findall semantics, not
//! split-on-delimiter: text that never reaches a stop (a trailing fragment
//! without terminal punctuation) is dropped rather than emitted as a partial
//! sentence.
//!
//! English segmentation delegates to UAX #29 sentence boundaries from the
//! `unicode-segmentation` crate. No abbreviation disambiguation is attempted.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::hanzi;
use crate::language::Language;

static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(hanzi::SENTENCE).expect("hanzi sentence pattern must compile"));

/// Splits Chinese (or mixed-script) text into sentences.
///
/// Returns the maximal matches of the sentence pattern in input order, as
/// slices of the input. Characters outside every class (bare Latin letters,
/// digits, ASCII punctuation) break the sentence body, so matching restarts
/// at the next eligible character.
///
/// # Example
///
/// ```
/// let sentences = juzi_core::segment("你好。世界！尚未结束");
/// assert_eq!(sentences, vec!["你好。", "世界！"]);
/// ```
pub fn segment(text: &str) -> Vec<&str> {
    SENTENCE_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Like [`segment`], but pairs each sentence with its byte offset in `text`.
pub fn segment_with_offsets(text: &str) -> Vec<(usize, &str)> {
    SENTENCE_RE
        .find_iter(text)
        .map(|m| (m.start(), m.as_str()))
        .collect()
}

/// Splits English text into sentences at UAX #29 boundaries.
///
/// Trailing whitespace is trimmed from each sentence; whitespace-only
/// segments are dropped.
pub fn segment_english(text: &str) -> Vec<&str> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Dispatches to the segmenter for `language`.
pub fn sentences(language: Language, text: &str) -> Vec<&str> {
    match language {
        Language::Chinese => segment(text),
        Language::English => segment_english(text),
    }
}
