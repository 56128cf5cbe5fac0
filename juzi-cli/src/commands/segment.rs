//! Segment command implementation
//!
//! Exposes the sentence segmenter directly: reads each input file and prints
//! its sentences without any grouping.

use anyhow::{Context, Result};
use clap::Args;
use std::io;
use std::path::PathBuf;

use crate::commands::process::Language;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, SentenceFormatter, TextFormatter};

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files, directories, or glob patterns
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Language for sentence segmentation
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with byte offsets
    Json,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        crate::commands::init_logging(self.quiet, self.verbose);

        let language = self.resolve_language()?;
        let files = resolve_patterns(&self.input)?;

        let mut formatter: Box<dyn SentenceFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout())),
        };

        for file in &files {
            let content = FileReader::read_text(file)?;
            for sentence in juzi_core::sentences(language, &content) {
                formatter.format_sentence(sentence, offset_in(&content, sentence))?;
            }
        }

        formatter.finish()
    }

    fn resolve_language(&self) -> Result<juzi_core::Language> {
        if let Some(language) = self.language {
            return Ok(language.into());
        }
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        config
            .processing
            .default_language
            .parse()
            .context("Invalid default_language in config")
    }
}

/// Byte offset of `sentence` within `text`; both segmenters return
/// subslices of the input, so pointer arithmetic is exact.
fn offset_in(text: &str, sentence: &str) -> usize {
    sentence.as_ptr() as usize - text.as_ptr() as usize
}
