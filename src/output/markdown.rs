use std::io::Write;

use super::OutputWriter;
use crate::board::{GameEntry, Scoreboard};

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, board: &Scoreboard<GameEntry>) -> anyhow::Result<()> {
        writeln!(self.writer, "# Scoreboard")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} of {} slots filled.",
            board.size(),
            board.capacity()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_table(&mut self, board: &Scoreboard<GameEntry>) -> anyhow::Result<()> {
        if board.is_empty() {
            writeln!(self.writer, "_No entries._")?;
            return Ok(());
        }

        writeln!(self.writer, "| Rank | Name | Score |")?;
        writeln!(self.writer, "|------|------|-------|")?;
        for standing in board.standings() {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                standing.rank,
                escape_cell(standing.entry.name()),
                standing.entry.score()
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_board(&mut self, board: &Scoreboard<GameEntry>) -> anyhow::Result<()> {
        self.write_header(board)?;
        self.write_table(board)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
