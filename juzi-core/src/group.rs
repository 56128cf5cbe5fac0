//! Grouping sentences by token count

use std::collections::BTreeMap;

use crate::language::Language;
use crate::tokenizer::{is_alphanumeric_token, Tokenizer};

/// Buckets of space-joined sentences keyed by token count, ascending.
pub type LengthBuckets = BTreeMap<usize, Vec<String>>;

/// Groups sentences by their token count.
///
/// Each sentence is tokenized for `language`; with `ignore_punctuation` set,
/// only fully alphanumeric tokens are counted. The bucket value is the
/// space-joined token string, so the written form reflects exactly the tokens
/// that were counted. Sentences whose tokens are all filtered away land in
/// bucket 0.
pub fn group_by_length<'a, I>(
    sentences: I,
    tokenizer: &Tokenizer,
    language: Language,
    ignore_punctuation: bool,
) -> LengthBuckets
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buckets = LengthBuckets::new();
    for sentence in sentences {
        let mut tokens = tokenizer.tokenize(language, sentence);
        if ignore_punctuation {
            tokens.retain(|t| is_alphanumeric_token(t));
        }
        buckets
            .entry(tokens.len())
            .or_default()
            .push(tokens.join(" "));
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_english_sentences_by_word_count() {
        let tokenizer = Tokenizer::new();
        let sentences = ["One two three.", "Alpha beta gamma.", "Just one."];
        let buckets = group_by_length(sentences, &tokenizer, Language::English, true);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[&2], vec!["Just one"]);
        assert_eq!(buckets[&3], vec!["One two three", "Alpha beta gamma"]);
    }

    #[test]
    fn punctuation_counts_unless_ignored() {
        let tokenizer = Tokenizer::new();
        let sentences = ["Hello, world."];

        let with_punct = group_by_length(sentences, &tokenizer, Language::English, false);
        assert_eq!(with_punct[&4], vec!["Hello , world ."]);

        let without = group_by_length(sentences, &tokenizer, Language::English, true);
        assert_eq!(without[&2], vec!["Hello world"]);
    }

    #[test]
    fn fully_filtered_sentence_lands_in_bucket_zero() {
        let tokenizer = Tokenizer::new();
        let buckets = group_by_length(["..."], &tokenizer, Language::English, true);
        assert_eq!(buckets[&0], vec![""]);
    }

    #[test]
    fn chinese_sentences_group_by_jieba_token_count() {
        let tokenizer = Tokenizer::new();
        let sentences = ["你好。", "世界！"];
        let buckets = group_by_length(sentences, &tokenizer, Language::Chinese, true);

        // Each sentence is one word once punctuation is ignored.
        assert_eq!(buckets[&1], vec!["你好", "世界"]);
    }

    #[test]
    fn bucket_keys_are_ascending() {
        let tokenizer = Tokenizer::new();
        let sentences = ["a b c d.", "a.", "a b."];
        let buckets = group_by_length(sentences, &tokenizer, Language::English, true);
        let keys: Vec<usize> = buckets.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 4]);
    }

    #[test]
    fn input_order_is_preserved_within_a_bucket() {
        let tokenizer = Tokenizer::new();
        let sentences = ["b first.", "a second."];
        let buckets = group_by_length(sentences, &tokenizer, Language::English, true);
        assert_eq!(buckets[&2], vec!["b first", "a second"]);
    }

    #[test]
    fn empty_input_produces_no_buckets() {
        let tokenizer = Tokenizer::new();
        let buckets = group_by_length(std::iter::empty(), &tokenizer, Language::Chinese, false);
        assert!(buckets.is_empty());
    }
}
