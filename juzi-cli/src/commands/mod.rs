//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod process;
pub mod segment;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Group document sentences into files by word count
    Process(process::ProcessArgs),

    /// Print the sentences of a document
    Segment(segment::SegmentArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Segment(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                for language in juzi_core::Language::all() {
                    println!("{language} ({})", language.code());
                }
            }
            ListCommands::Formats => {
                println!("text - one sentence per line");
                println!("json - array of sentences with byte offsets");
            }
        }
        Ok(())
    }
}

/// Initialize logging from the shared quiet/verbose flags
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init()
        .ok();
}
