//! Wordclass CLI - corpus statistics for word-class induction.
//!
//! This is the main entry point for the `wordclass` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{StatsCommand, VocabCommand};

#[derive(Parser)]
#[command(name = "wordclass")]
#[command(about = "Co-occurrence statistics for word-class induction", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a co-occurrence matrix from a corpus and print summary statistics
    Stats(StatsCommand),
    /// List vocabulary words meeting an occurrence threshold
    Vocab(VocabCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats(cmd) => commands::stats::run(cmd)?,
        Commands::Vocab(cmd) => commands::vocab::run(cmd)?,
    }

    Ok(())
}
