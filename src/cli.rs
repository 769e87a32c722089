use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::board::GameEntry;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "scoreboard")]
#[command(about = "Fixed-capacity ranked leaderboard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank entries on a bounded board and print the standings
    Rank {
        /// Entries to add, in order, as NAME:SCORE
        #[arg(value_name = "NAME:SCORE")]
        entries: Vec<GameEntry>,

        /// Maximum number of entries kept (defaults to the config file)
        #[arg(short, long, env = "SCOREBOARD_CAPACITY")]
        capacity: Option<usize>,

        /// Remove the entry at INDEX after all entries are added (repeatable)
        #[arg(long = "remove", value_name = "INDEX")]
        removals: Vec<usize>,

        /// Output format (defaults to the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Explicit config file instead of discovering .scoreboard.toml
        #[arg(long)]
        config: Option<PathBuf>,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Write a default .scoreboard.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
