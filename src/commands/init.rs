use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;

const DEFAULT_CONFIG: &str = r#"# Scoreboard Configuration

[board]
capacity = 10

[output]
default_format = "terminal"
plain = false
"#;

/// Write the default config into the current directory
pub fn init_config(force: bool) -> Result<PathBuf> {
    let dir = std::env::current_dir().context("Failed to get current directory")?;
    init_config_in(&dir, force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    log::info!("Wrote {}", config_path.display());

    Ok(config_path)
}
