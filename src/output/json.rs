use std::io::Write;

use serde::Serialize;

use super::OutputWriter;
use crate::board::{GameEntry, Scoreboard, Standing};

#[derive(Serialize)]
struct BoardReport<'a> {
    capacity: usize,
    size: usize,
    entries: Vec<Standing<'a, GameEntry>>,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_board(&mut self, board: &Scoreboard<GameEntry>) -> anyhow::Result<()> {
        let report = BoardReport {
            capacity: board.capacity(),
            size: board.size(),
            entries: board.standings().collect(),
        };
        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
