// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::logging::LogFormat;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Activities API base URL
    pub api_url: String,
    /// Upper bound on each gateway call; `None` waits forever
    pub request_timeout: Option<Duration>,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            log_format: LogFormat::Pretty,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first, if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("ACTIVITIES_API_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match lookup("ACTIVITIES_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: "ACTIVITIES_REQUEST_TIMEOUT_SECS",
                value: raw,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let log_format = match lookup("ACTIVITIES_LOG_FORMAT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "ACTIVITIES_LOG_FORMAT",
                value: raw,
            })?,
            None => LogFormat::Pretty,
        };

        Ok(Self {
            api_url,
            request_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            log_format,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).expect("Config should load");

        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.log_format, LogFormat::Pretty);

        let default = ClientConfig::default();
        assert_eq!(default.api_url, config.api_url);
        assert_eq!(default.request_timeout, config.request_timeout);
        assert_eq!(default.log_format, config.log_format);
    }

    #[test]
    fn test_config_from_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("ACTIVITIES_API_URL", " https://example.test/api "),
            ("ACTIVITIES_REQUEST_TIMEOUT_SECS", "5"),
            ("ACTIVITIES_LOG_FORMAT", "json"),
        ]))
        .expect("Config should load");

        assert_eq!(config.api_url, "https://example.test/api");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_zero_timeout_disables_timeout() {
        let config =
            ClientConfig::from_lookup(lookup(&[("ACTIVITIES_REQUEST_TIMEOUT_SECS", "0")]))
                .unwrap();
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[("ACTIVITIES_REQUEST_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { key: "ACTIVITIES_REQUEST_TIMEOUT_SECS", .. }
        ));
    }
}
