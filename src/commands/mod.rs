//! CLI command implementations.
//!
//! Available commands:
//! - **rank**: Build a board from entries and print the standings
//! - **init**: Write a default `.scoreboard.toml`

pub mod init;
pub mod rank;

pub use init::init_config;
pub use rank::{handle_rank, RankConfig};
