//! Sentence segmentation and token-count grouping for Chinese and English
//!
//! The heart of this crate is the Chinese sentence segmenter: a regular
//! expression over hand-curated Unicode character classes ([`hanzi`]) that
//! defines a sentence as a run of ideographs, radicals, and non-stop
//! punctuation, terminated by a stop, optionally trailed by closing marks.
//! Everything else layers on top: English segmentation via UAX #29, word
//! tokenization (jieba for Chinese), and bucketing sentences by token count.
//!
//! # Example
//!
//! ```rust
//! use juzi_core::{group_by_length, segment, Language, Tokenizer};
//!
//! let sentences = segment("他说：“你好。”再见！");
//! assert_eq!(sentences, vec!["他说：“你好。”", "再见！"]);
//!
//! let tokenizer = Tokenizer::new();
//! let buckets = group_by_length(sentences, &tokenizer, Language::Chinese, true);
//! assert!(buckets.keys().all(|&len| len > 0));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod group;
pub mod hanzi;
pub mod language;
pub mod segmenter;
pub mod tokenizer;

pub use error::{Error, Result};
pub use group::{group_by_length, LengthBuckets};
pub use language::Language;
pub use segmenter::{segment, segment_english, segment_with_offsets, sentences};
pub use tokenizer::{is_alphanumeric_token, Tokenizer};
