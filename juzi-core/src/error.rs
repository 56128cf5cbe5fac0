//! Error types for the core library
//!
//! Segmentation and grouping are pure functions with no runtime failure
//! modes; the only fallible operation is resolving a language name.

use thiserror::Error;

/// Error type for core operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unknown language name or code
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
