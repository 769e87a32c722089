//! `.scoreboard.toml` configuration: types, discovery and validation.

mod types;
mod loader;

pub use types::{default_capacity, BoardConfig, OutputConfig, ScoreboardConfig, DEFAULT_CAPACITY};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
