//! Bounded ranked board and the entries stored on it.

mod entry;
mod scoreboard;

pub use entry::{GameEntry, Scored};
pub use scoreboard::{Placement, Regime, Scoreboard, Standing};
