// Export modules for library usage
pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod observability;
pub mod output;
pub mod structures;

// Re-export commonly used types
pub use crate::board::{GameEntry, Placement, Regime, Scoreboard, Scored, Standing};
pub use crate::errors::{Error, Result};
pub use crate::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::structures::{DoublyLinkedList, List};
