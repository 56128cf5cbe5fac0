//! Writing length buckets to the output directory
//!
//! Each processed document gets its own directory under the output root,
//! named after the document stem, with one `<N>.txt` per distinct token
//! count. A stale directory from a previous run is replaced wholesale.

use anyhow::{Context, Result};
use juzi_core::LengthBuckets;
use std::fs;
use std::path::{Path, PathBuf};

/// Write one file per bucket at `<output_root>/<stem>/<N>.txt`.
///
/// Returns the per-document directory that was written.
pub fn write_buckets(output_root: &Path, stem: &str, buckets: &LengthBuckets) -> Result<PathBuf> {
    let dir = output_root.join(stem);
    if dir.is_dir() {
        fs::remove_dir_all(&dir)
            .with_context(|| format!("Failed to clear previous results: {}", dir.display()))?;
    }
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    for (length, sentences) in buckets {
        let file = dir.join(format!("{length}.txt"));
        fs::write(&file, sentences.join("\n"))
            .with_context(|| format!("Failed to write: {}", file.display()))?;
    }

    Ok(dir)
}
