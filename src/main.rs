use anyhow::Result;
use clap::Parser;
use scoreboard::cli::{Cli, Commands};
use scoreboard::commands::{self, RankConfig};
use scoreboard::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Rank {
            entries,
            capacity,
            removals,
            format,
            output,
            config,
            plain,
        } => commands::handle_rank(RankConfig {
            entries,
            capacity,
            removals,
            format,
            output,
            config,
            plain,
        }),
        Commands::Init { force } => {
            let path = commands::init_config(force)?;
            println!("Created {}", path.display());
            Ok(())
        }
    }
}
