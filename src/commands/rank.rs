use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use crate::board::{GameEntry, Placement, Scoreboard};
use crate::config::{load_config, load_config_file, ScoreboardConfig};
use crate::output::{create_writer, OutputFormat};

#[derive(Debug, Clone, Default)]
pub struct RankConfig {
    pub entries: Vec<GameEntry>,
    pub capacity: Option<usize>,
    pub removals: Vec<usize>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

/// Settings after CLI flags have been layered over the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankSettings {
    pub capacity: usize,
    pub format: OutputFormat,
    pub plain: bool,
}

pub fn resolve_settings(config: &RankConfig, file_config: &ScoreboardConfig) -> RankSettings {
    RankSettings {
        capacity: config.capacity.unwrap_or(file_config.board.capacity),
        format: config.format.unwrap_or(file_config.output.default_format),
        // Files never get ANSI escapes
        plain: config.plain || file_config.output.plain || config.output.is_some(),
    }
}

/// Add `entries` in order, then apply `removals` in order
pub fn build_board(
    capacity: usize,
    entries: Vec<GameEntry>,
    removals: &[usize],
) -> crate::errors::Result<Scoreboard<GameEntry>> {
    let mut board = Scoreboard::new(capacity)?;

    for entry in entries {
        if let Placement::Rejected(entry) = board.add(entry) {
            info!(name = entry.name(), score = entry.score(), "entry did not make the board");
        }
    }

    for &index in removals {
        if let Some(removed) = board.remove(index)? {
            info!(index, name = removed.name(), "removed entry");
        }
    }

    Ok(board)
}

pub fn handle_rank(config: RankConfig) -> Result<()> {
    let file_config = match &config.config {
        Some(path) => load_config_file(path)?,
        None => load_config(),
    };
    let settings = resolve_settings(&config, &file_config);

    let board = build_board(settings.capacity, config.entries, &config.removals)?;

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };

    create_writer(settings.format, settings.plain, sink).write_board(&board)
}
