//! juzi command-line entry point

use clap::Parser;
use juzi_cli::commands::Commands;

/// Segment documents into sentences and group them by word count
#[derive(Debug, Parser)]
#[command(name = "juzi", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = cli.command.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
