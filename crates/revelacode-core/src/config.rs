//! Configuration read from the process environment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;
pub const DB_FILE_NAME: &str = "revelacode.db";

/// Top-level RevelaCode configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevelaConfig {
    /// HTTP server port.
    pub port: u16,
    /// Root data directory.
    pub data_dir: PathBuf,
    /// Document store file.
    pub db_path: PathBuf,
    /// Sent as the `api-key` header on outbound verse fetches.
    #[serde(skip_serializing)]
    pub bible_api_key: Option<String>,
    /// Timeout for a single outbound verse fetch, in seconds.
    pub fetch_timeout_secs: u64,
    /// Bearer token required by the legal update route, when set.
    #[serde(skip_serializing)]
    pub admin_token: Option<String>,
}

impl RevelaConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = non_empty(lookup("REVELACODE_DATA_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let port = match non_empty(lookup("PORT")) {
            Some(p) => p
                .parse()
                .map_err(|_| Error::Config(format!("PORT is not a valid port: {}", p)))?,
            None => DEFAULT_PORT,
        };

        let fetch_timeout_secs = match non_empty(lookup("VERSE_FETCH_TIMEOUT_SECS")) {
            Some(s) => s.parse().map_err(|_| {
                Error::Config(format!("VERSE_FETCH_TIMEOUT_SECS is not a number: {}", s))
            })?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        let db_path = non_empty(lookup("REVELACODE_DB_PATH"))
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(DB_FILE_NAME));

        Ok(Self {
            port,
            data_dir,
            db_path,
            bible_api_key: non_empty(lookup("BIBLE_API_KEY")),
            fetch_timeout_secs,
            admin_token: non_empty(lookup("REVELACODE_ADMIN_TOKEN")),
        })
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
