/// Configuration loading: one immutable [`Config`] built from the environment at startup.
use std::time::Duration;

use thiserror::Error;

/// Base URL of the storage service mock.
pub const URL_VAR: &str = "SSMOCK_URL";
/// Request timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "SSMOCK_TIMEOUT";

/// Timeout applied when neither `SSMOCK_TIMEOUT` nor `--timeout` is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest accepted timeout, one day.
pub const MAX_TIMEOUT_SECS: u64 = 86_400;

/// Errors raised while loading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SSMOCK_URL environment variable must be set")]
    MissingUrl,

    #[error(
        "SSMOCK_TIMEOUT must be between 1 and {max} seconds, got '{value}'",
        max = MAX_TIMEOUT_SECS
    )]
    InvalidTimeout { value: String },
}

/// Settings for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Bounds both connecting and the whole request.
    pub timeout: Duration,
}

impl Config {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Config::from_lookup`].
    pub fn from_env(timeout_override: Option<u64>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), timeout_override)
    }

    /// Load using an arbitrary variable lookup. `timeout_override` wins over
    /// `SSMOCK_TIMEOUT` when present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingUrl` if `SSMOCK_URL` is unset or empty, and
    /// `ConfigError::InvalidTimeout` if the timeout is not an integer in
    /// `1..=MAX_TIMEOUT_SECS`.
    pub fn from_lookup<F>(lookup: F, timeout_override: Option<u64>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(URL_VAR)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingUrl)?;

        let timeout = match timeout_override {
            Some(secs) => parse_timeout(&secs.to_string())?,
            None => match lookup(TIMEOUT_VAR) {
                Some(raw) => parse_timeout(&raw)?,
                None => DEFAULT_TIMEOUT,
            },
        };

        Ok(Self {
            base_url: normalize_base_url(&base_url).to_owned(),
            timeout,
        })
    }

    /// Full URL of the replicate endpoint.
    #[must_use]
    pub fn replicate_url(&self) -> String {
        format!("{}/_internal/replicate", self.base_url)
    }
}

/// Strip a single trailing slash.
#[must_use]
pub fn normalize_base_url(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if (1..=MAX_TIMEOUT_SECS).contains(&secs) => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            value: raw.to_owned(),
        }),
    }
}
