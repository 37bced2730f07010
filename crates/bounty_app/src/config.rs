//! RON configuration for the `bounty-board` CLI.
//!
//! A missing file is not an error: every field has a default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bounty_core::DEFAULT_PAGE_LIMIT;
use bounty_engine::FetchSettings;
use serde::{Deserialize, Serialize};
use store_logging::LogDestination;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "./bounty_board.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub page_limit: u32,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub annotate_proofs: bool,
    pub log_destination: LogDestination,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            base_url: fetch.base_url,
            page_limit: DEFAULT_PAGE_LIMIT,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            annotate_proofs: true,
            log_destination: LogDestination::Terminal,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fetch settings, with `base_url_override` taking precedence over the file.
    pub fn fetch_settings(&self, base_url_override: Option<String>) -> FetchSettings {
        FetchSettings {
            base_url: base_url_override.unwrap_or_else(|| self.base_url.clone()),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}
