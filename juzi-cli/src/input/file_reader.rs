//! File reading with per-extension dispatch

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::docx;
use crate::error::CliError;

/// File formats the CLI can extract text from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// UTF-8 plain text (.txt)
    PlainText,
    /// Office Open XML document (.docx)
    Docx,
}

impl FileFormat {
    /// Detect the format from the file extension, case-insensitive.
    pub fn from_path(path: &Path) -> Option<FileFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(FileFormat::PlainText),
            "docx" => Some(FileFormat::Docx),
            _ => None,
        }
    }
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as Unicode text, dispatching on its extension.
    pub fn read_text(path: &Path) -> Result<String> {
        match FileFormat::from_path(path) {
            Some(FileFormat::PlainText) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display())),
            Some(FileFormat::Docx) => docx::extract_text(path),
            None => {
                let ext = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("(none)")
                    .to_string();
                Err(CliError::UnsupportedFormat(ext).into())
            }
        }
    }
}
