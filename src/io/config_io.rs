use std::fs;
use std::path::{Path, PathBuf};

use crate::model::PlannerConfig;

/// Error type for lectio directory / config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no lectio/ directory found — run `lx init` first")]
    NotInitialized,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Name of the state directory
pub const DIR_NAME: &str = "lectio";
/// Name of the config file inside it
pub const CONFIG_FILE: &str = "config.toml";

/// Discover the lectio directory by walking up from the given directory.
pub fn discover_dir(start: &Path) -> Result<PathBuf, ConfigError> {
    let mut current = start.to_path_buf();
    loop {
        let dir = current.join(DIR_NAME);
        if dir.is_dir() && dir.join(CONFIG_FILE).exists() {
            return Ok(dir);
        }
        if !current.pop() {
            return Err(ConfigError::NotInitialized);
        }
    }
}

/// Load config.toml from the lectio directory. A missing file yields
/// defaults; a malformed file is an error (edit it or re-init).
pub fn load_config(dir: &Path) -> Result<PlannerConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(PlannerConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}
