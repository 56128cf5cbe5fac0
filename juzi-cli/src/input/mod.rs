//! Input handling module

pub mod docx;
pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::{FileFormat, FileReader};
pub use glob_resolver::resolve_patterns;
