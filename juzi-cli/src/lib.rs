//! juzi CLI library
//!
//! This library provides the command-line interface around the juzi-core
//! segmentation and length-grouping primitives.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
