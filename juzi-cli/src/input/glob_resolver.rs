//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Resolve file patterns to actual file paths
///
/// A pattern naming a directory expands to the files directly inside it.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if Path::new(pattern).is_dir() {
            let entries = fs::read_dir(pattern)
                .with_context(|| format!("Failed to list directory: {pattern}"))?;
            for entry in entries {
                let path = entry
                    .with_context(|| format!("Error listing directory: {pattern}"))?
                    .path();
                if path.is_file() {
                    files.push(path);
                }
            }
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}
