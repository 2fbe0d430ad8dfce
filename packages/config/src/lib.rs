// ABOUTME: Client configuration loaded from environment variables and an optional .env file
// ABOUTME: Resolves the API base URL, HTTP timeouts and the local directory holding the session

pub mod constants;

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use constants::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
    #[error("Invalid value for {name}: {source}")]
    InvalidNumber {
        name: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
    #[error("Could not determine home directory; set TASKMAN_HOME")]
    NoHomeDir,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the board API, without a trailing slash
    pub api_url: String,
    /// Directory holding the session file
    pub home_dir: PathBuf,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

/// Load `.env` from the working directory if present
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env loaded: {}", e),
    }
}

/// `$TASKMAN_HOME`, or `~/.taskman`
pub fn taskman_home() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = env::var(TASKMAN_HOME) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".taskman"))
        .ok_or(ConfigError::NoHomeDir)
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var(TASKMAN_API_URL)
            .or_else(|_| env::var(VITE_API_URL))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let request_timeout = timeout_from_env(
            TASKMAN_HTTP_REQUEST_TIMEOUT_SECS,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;
        let connect_timeout = timeout_from_env(
            TASKMAN_HTTP_CONNECT_TIMEOUT_SECS,
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?;

        Ok(Self {
            api_url: normalize_api_url(&api_url)?,
            home_dir: taskman_home()?,
            request_timeout,
            connect_timeout,
        })
    }

    /// Config pointing at `api_url` with default timeouts, for tests and embedding
    pub fn for_api(api_url: &str, home_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: normalize_api_url(api_url)?,
            home_dir: home_dir.into(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        })
    }

    /// Override the API URL, e.g. from a command line flag
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ConfigError> {
        self.api_url = normalize_api_url(api_url)?;
        Ok(self)
    }

    pub fn session_file(&self) -> PathBuf {
        self.home_dir.join(SESSION_FILE)
    }

    /// Absolute URL for an API path such as `/tasks/5`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

fn timeout_from_env(name: &'static str, default: u64) -> Result<Duration, ConfigError> {
    let secs = match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|source| ConfigError::InvalidNumber { name, source })?,
        Err(_) => default,
    };
    if secs == 0 {
        return Err(ConfigError::ZeroTimeout(name));
    }
    Ok(Duration::from_secs(secs))
}

fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidApiUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidApiUrl {
            url: raw.to_string(),
            reason: "scheme must be http or https".to_string(),
        });
    }
    Ok(trimmed.to_string())
}
