//! Rendering a board's standings for presentation.
//!
//! The core only exposes ordered iteration; everything here is a thin
//! writer over [`Scoreboard::standings`](crate::board::Scoreboard::standings).

mod json;
mod markdown;
mod terminal;

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::board::{GameEntry, Scoreboard};

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_board(&mut self, board: &Scoreboard<GameEntry>) -> anyhow::Result<()>;
}

/// Writer for `format` over `sink`. `plain` only affects terminal output.
pub fn create_writer(
    format: OutputFormat,
    plain: bool,
    sink: Box<dyn Write>,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, plain)),
    }
}

#[cfg(test)]
pub(crate) fn sample_board() -> Scoreboard<GameEntry> {
    let mut board = Scoreboard::new(3).expect("capacity is positive");
    board.add(GameEntry::new("alice", 10));
    board.add(GameEntry::new("bob", 20));
    board
}
