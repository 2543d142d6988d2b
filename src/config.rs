use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config file {path:?} is not valid json: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("TIAN_API_KEY is not set in {path:?}")]
    MissingKey { path: PathBuf },
}

impl ConfigError {
    /// Path of the offending config file, for user-facing error replies.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::MissingKey { path } => path,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BotConfig {
    #[serde(rename = "TIAN_API_KEY", default)]
    pub tian_api_key: String,
}

/// Read the TianAPI key from the JSON config file.
///
/// The key is resolved on every request, so the file can be dropped in or
/// fixed without restarting the bot.
pub async fn load_api_key(path: &Path) -> Result<String, ConfigError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let config: BotConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if config.tian_api_key.is_empty() {
        return Err(ConfigError::MissingKey {
            path: path.to_path_buf(),
        });
    }

    Ok(config.tian_api_key)
}
