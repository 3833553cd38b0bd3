//! Client configuration read from the environment.
//!
//! Everything is resolved once, up front: a missing API key is reported by
//! [`ClientConfig::from_env`] rather than by the first request coming back
//! unauthorized.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{FootballError, Result};

/// Environment variable holding the RapidAPI key.
pub const API_KEY_ENV_VAR: &str = "API_FOOTBALL_KEY";

/// Optional override for the API base URL (proxies, mock servers).
pub const BASE_URL_ENV_VAR: &str = "API_FOOTBALL_BASE_URL";

/// Optional request timeout in whole seconds.
pub const TIMEOUT_ENV_VAR: &str = "API_FOOTBALL_TIMEOUT_SECS";

/// RapidAPI host serving API-Football v3.
pub const RAPIDAPI_HOST: &str = "api-football-v1.p.rapidapi.com";

/// Base path for API-Football v3.
pub const DEFAULT_BASE_URL: &str = "https://api-football-v1.p.rapidapi.com/v3";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Static settings shared by every request.
#[derive(Debug)]
pub struct ClientConfig {
    pub api_key: SecretString,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a config with an explicit key and the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(FootballError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            });
        }

        Ok(Self {
            api_key: SecretString::from(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Read the config from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the config through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV_VAR).ok_or_else(|| FootballError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        })?;
        let mut config = Self::new(api_key)?;

        if let Some(url) = lookup(BASE_URL_ENV_VAR).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url);
        }

        if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| FootballError::InvalidConfig {
                    key: TIMEOUT_ENV_VAR.to_string(),
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Point the client somewhere else; a trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}
