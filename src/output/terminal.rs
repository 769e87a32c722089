use std::io::Write;

use colored::*;

use super::OutputWriter;
use crate::board::{GameEntry, Scoreboard};

pub struct TerminalWriter<W: Write> {
    writer: W,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, plain: bool) -> Self {
        Self { writer, plain }
    }

    fn paint(&self, text: String, style: fn(String) -> ColoredString) -> String {
        if self.plain {
            text
        } else {
            style(text).to_string()
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_board(&mut self, board: &Scoreboard<GameEntry>) -> anyhow::Result<()> {
        let header = self.paint(
            format!("Scoreboard ({}/{})", board.size(), board.capacity()),
            |s| s.bold(),
        );
        writeln!(self.writer, "{header}")?;

        if board.is_empty() {
            let empty = self.paint("  no entries".to_string(), |s| s.dimmed());
            writeln!(self.writer, "{empty}")?;
        }

        let name_width = board
            .iter()
            .map(|entry| entry.name().chars().count())
            .max()
            .unwrap_or(0);

        for standing in board.standings() {
            let rank = format!("#{:<3}", standing.rank);
            let rank = match standing.rank {
                1 => self.paint(rank, |s| s.yellow().bold()),
                _ => self.paint(rank, |s| s.dimmed()),
            };
            let score = self.paint(standing.entry.score().to_string(), |s| s.green());
            writeln!(
                self.writer,
                "  {rank} {:<name_width$}  {score}",
                standing.entry.name()
            )?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
