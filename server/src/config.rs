//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but not a valid port number.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    /// `HRDESK_API_UPSTREAM` is set but not an http(s) URL.
    #[error("invalid HRDESK_API_UPSTREAM: {0:?} (expected an http:// or https:// URL)")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL `/api/*` is forwarded to, without a trailing slash.
    /// `None` disables the proxy.
    pub api_upstream: Option<String>,
    pub proxy_timeout: Duration,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `HRDESK_API_UPSTREAM`: remote API base, e.g. `http://localhost:5000/api`
    /// - `HRDESK_PROXY_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a set variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_upstream = non_empty(lookup("HRDESK_API_UPSTREAM")).map(parse_upstream).transpose()?;

        let timeout_secs = non_empty(lookup("HRDESK_PROXY_TIMEOUT_SECS"))
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_PROXY_TIMEOUT_SECS);

        Ok(Self { port, api_upstream, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_upstream(raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if has_host { Ok(trimmed.to_owned()) } else { Err(ConfigError::InvalidUpstream(raw)) }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
