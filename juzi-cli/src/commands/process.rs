//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use juzi_core::{group_by_length, sentences, Tokenizer};

use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileFormat, FileReader};
use crate::output::write_buckets;
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files, directories, or glob patterns
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Language for sentence segmentation and word tokenization
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Drop punctuation tokens before counting
    #[arg(long)]
    pub ignore_punctuation: bool,

    /// Root directory for grouped results (default: ./counting_result)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

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

/// Supported languages
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Language {
    /// Chinese: pattern-based segmentation, jieba tokenization
    Chinese,
    /// English: UAX #29 segmentation and tokenization
    English,
}

impl From<Language> for juzi_core::Language {
    fn from(language: Language) -> Self {
        match language {
            Language::Chinese => juzi_core::Language::Chinese,
            Language::English => juzi_core::Language::English,
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        crate::commands::init_logging(self.quiet, self.verbose);

        let config = self.load_config()?;
        let language = self.resolve_language(&config)?;
        let ignore_punctuation =
            self.ignore_punctuation || config.processing.ignore_punctuation;
        let output_root = self
            .output
            .clone()
            .unwrap_or_else(|| config.output.directory.clone());

        log::info!("Processing with language={language}, ignore_punctuation={ignore_punctuation}");

        let files = resolve_patterns(&self.input)?;
        let tokenizer = Tokenizer::new();

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for file in &files {
            if FileFormat::from_path(file).is_none() {
                log::warn!("Unsupported filetype: {}. Skipped.", file.display());
                progress.file_completed(&file.display().to_string());
                continue;
            }

            let dir = process_file(file, language, ignore_punctuation, &tokenizer, &output_root)?;
            log::info!("Results have been saved to {}.", dir.display());
            progress.file_completed(&file.display().to_string());
        }

        progress.finish();
        Ok(())
    }

    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => CliConfig::load(path),
            None => Ok(CliConfig::default()),
        }
    }

    fn resolve_language(&self, config: &CliConfig) -> Result<juzi_core::Language> {
        match self.language {
            Some(language) => Ok(language.into()),
            None => config
                .processing
                .default_language
                .parse()
                .context("Invalid default_language in config"),
        }
    }
}

/// Segment, group, and write one document; returns the result directory.
fn process_file(
    file: &Path,
    language: juzi_core::Language,
    ignore_punctuation: bool,
    tokenizer: &Tokenizer,
    output_root: &Path,
) -> Result<PathBuf> {
    log::info!("Processing {}...", file.display());

    let content = FileReader::read_text(file)?;
    let segmented = sentences(language, &content);
    log::debug!("{} sentences in {}", segmented.len(), file.display());

    let buckets = group_by_length(segmented, tokenizer, language, ignore_punctuation);

    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Invalid file name: {}", file.display()))?;
    write_buckets(output_root, stem, &buckets)
}
