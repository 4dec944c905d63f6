//! Environment-only configuration, read once at process start.
//!
//! | Variable                | Meaning                                   | Default          |
//! |-------------------------|-------------------------------------------|------------------|
//! | `GEMINI_API_KEY`        | API key for the Gemini backend            | *(none)*         |
//! | `GEMINI_BASE_URL`       | Override of the Gemini API base           | public endpoint  |
//! | `FITPLAN_OUTPUT_DIR`    | Directory PDFs are written to             | `.`              |
//! | `FITPLAN_HISTORY_LIMIT` | Max history entries per session           | unbounded        |
//! | `FITPLAN_BIND_ADDR`     | Listen address of the web front-end       | `127.0.0.1:8501` |
//!
//! A `.env` file in the working directory is loaded first when present.

use std::{env, net::SocketAddr, num::NonZeroUsize, path::PathBuf};

use fitplan_core::error::FitplanError;
use fitplan_gemini::{API_KEY_ENV, GeminiAdapter, GeminiAdapterBuilder};
use thiserror::Error;
use tracing::debug;

pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";
pub const OUTPUT_DIR_ENV: &str = "FITPLAN_OUTPUT_DIR";
pub const HISTORY_LIMIT_ENV: &str = "FITPLAN_HISTORY_LIMIT";
pub const BIND_ADDR_ENV: &str = "FITPLAN_BIND_ADDR";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`FITPLAN_HISTORY_LIMIT` must be a positive integer, got `{0}`")]
    InvalidHistoryLimit(String),

    #[error("`FITPLAN_BIND_ADDR` must be a socket address like `127.0.0.1:8501`, got `{0}`")]
    InvalidBindAddr(String),
}

#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub gemini_base_url: Option<String>,
    pub output_dir: PathBuf,
    pub history_limit: Option<NonZeroUsize>,
    pub bind_addr: SocketAddr,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("gemini_base_url", &self.gemini_base_url)
            .field("output_dir", &self.output_dir)
            .field("history_limit", &self.history_limit)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env file"),
            Err(err) => debug!("no .env file loaded: {err}"),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key → value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let history_limit = match non_empty(HISTORY_LIMIT_ENV) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<NonZeroUsize>()
                    .map_err(|_| ConfigError::InvalidHistoryLimit(raw.clone()))?,
            ),
            None => None,
        };

        let raw_bind = non_empty(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw_bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_bind.clone()))?;

        Ok(Self {
            api_key: non_empty(API_KEY_ENV).map(|key| key.trim().to_owned()),
            gemini_base_url: non_empty(BASE_URL_ENV),
            output_dir: non_empty(OUTPUT_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            history_limit,
            bind_addr,
        })
    }

    /// Build the Gemini backend. Only HTTP client construction can fail; a
    /// missing key is logged and reported on the first request instead.
    pub fn gemini_adapter(&self) -> Result<GeminiAdapter, FitplanError> {
        let mut builder = GeminiAdapterBuilder::new().with_api_key(self.api_key.clone());
        if let Some(base_url) = &self.gemini_base_url {
            builder = builder.with_base_url(base_url.clone());
        }
        builder.build()
    }
}
