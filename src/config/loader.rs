use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::types::ScoreboardConfig;
use crate::errors::{Error, Result, ResultExt};

pub const CONFIG_FILE_NAME: &str = ".scoreboard.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<ScoreboardConfig> {
    let config = toml::from_str::<ScoreboardConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Try loading config from a specific path, logging why when it can't be used
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ScoreboardConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its parents, nearest first, at most `max_depth` of them
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.scoreboard.toml`.
///
/// The first readable, valid file wins. Falls back to defaults.
pub fn load_config_from(start: &Path) -> ScoreboardConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ScoreboardConfig::default()
        })
}

/// Discover config from the current working directory
pub fn load_config() -> ScoreboardConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ScoreboardConfig::default()
        }
    }
}

/// Load an explicitly named config file. Unlike discovery, failures are errors.
pub fn load_config_file(path: &Path) -> Result<ScoreboardConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::file_system(e.to_string(), path))?;
    parse_and_validate_config(&contents).context(format!("Invalid config {}", path.display()))
}
