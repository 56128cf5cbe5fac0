//! Output module: sentence formatters and length-bucket writing

use anyhow::Result;

/// Trait for sentence output formatters
pub trait SentenceFormatter {
    /// Format and output a single sentence
    fn format_sentence(&mut self, sentence: &str, offset: usize) -> Result<()>;

    /// Finalize output (e.g. close a JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod buckets;
pub mod json;
pub mod text;

pub use buckets::write_buckets;
pub use json::JsonFormatter;
pub use text::TextFormatter;
