//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// File extension not handled by any reader
    UnsupportedFormat(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::UnsupportedFormat(ext) => write!(f, "Unsupported filetype: {ext}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CliError::UnsupportedFormat(".pdf".to_string());
        assert_eq!(error.to_string(), "Unsupported filetype: .pdf");

        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");

        let error = CliError::ConfigError("missing field".to_string());
        assert_eq!(error.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::UnsupportedFormat(".docm".to_string());
        let _: &dyn std::error::Error = &error;
        assert!(format!("{error:?}").contains("UnsupportedFormat"));
    }
}
