//! Backend connection settings and their environment fallbacks.
//!
//! Explicit values win over the environment; the base URL has a default, the
//! API key does not.
//!
//! ```rust
//! use pclient::{ClientConfig, ClientErrorKind};
//!
//! let config = ClientConfig::resolve_with(None, Some("key-1".to_string()), |_| None)
//!     .expect("explicit key should resolve");
//! assert_eq!(config.base_url, "http://localhost:81/pront/api");
//!
//! let error = ClientConfig::resolve_with(None, None, |_| None).expect_err("no key");
//! assert_eq!(error.kind, ClientErrorKind::Configuration);
//! ```

use std::time::Duration;

use crate::{ClientError, SecretString};

pub const BASE_URL_ENV: &str = "PRONT_API_URL";
pub const API_KEY_ENV: &str = "PRONT_API_KEY";
pub const DEFAULT_BASE_URL: &str = "http://localhost:81/pront/api";
pub const DEFAULT_HEALTH_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: SecretString,
    pub health_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::resolve_with(Some(base_url.into()), Some(api_key.into()), |_| None)
    }

    /// Resolves settings from explicit values, then the process environment.
    pub fn resolve(base_url: Option<String>, api_key: Option<String>) -> Result<Self, ClientError> {
        Self::resolve_with(base_url, api_key, |name| std::env::var(name).ok())
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::resolve(None, None)
    }

    pub fn resolve_with<F>(
        base_url: Option<String>,
        api_key: Option<String>,
        lookup: F,
    ) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = non_empty(base_url)
            .or_else(|| non_empty(lookup(BASE_URL_ENV)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_key = non_empty(api_key)
            .or_else(|| non_empty(lookup(API_KEY_ENV)))
            .ok_or_else(|| {
                ClientError::configuration(format!(
                    "{API_KEY_ENV} is not configured; set it in the environment or pass it explicitly"
                ))
            })?;

        Ok(Self {
            base_url,
            api_key: SecretString::new(api_key),
            health_timeout: DEFAULT_HEALTH_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::ClientErrorKind;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn explicit_values_take_precedence_over_environment() {
        let config = ClientConfig::resolve_with(
            Some("http://pront.local/api".to_string()),
            Some("explicit-key".to_string()),
            env(&[(BASE_URL_ENV, "http://env/api"), (API_KEY_ENV, "env-key")]),
        )
        .expect("config should resolve");

        assert_eq!(config.base_url, "http://pront.local/api");
        assert_eq!(config.api_key.expose(), "explicit-key");
    }

    #[test]
    fn environment_fills_missing_values() {
        let config = ClientConfig::resolve_with(
            None,
            None,
            env(&[(BASE_URL_ENV, "http://env/api"), (API_KEY_ENV, "env-key")]),
        )
        .expect("config should resolve");

        assert_eq!(config.base_url, "http://env/api");
        assert_eq!(config.api_key.expose(), "env-key");
    }

    #[test]
    fn empty_explicit_key_falls_back_to_environment() {
        let config = ClientConfig::resolve_with(
            None,
            Some(String::new()),
            env(&[(API_KEY_ENV, "env-key")]),
        )
        .expect("config should resolve");

        assert_eq!(config.api_key.expose(), "env-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let error = ClientConfig::resolve_with(None, None, env(&[(API_KEY_ENV, "  ")]))
            .expect_err("blank key should fail");

        assert_eq!(error.kind, ClientErrorKind::Configuration);
        assert!(error.message.contains(API_KEY_ENV));
    }

    #[test]
    fn default_timeouts_match_backend_contract() {
        let config = ClientConfig::new("http://pront.local/api", "key").expect("config");
        assert_eq!(config.health_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(15));

        let config = config.with_request_timeout(Duration::from_millis(50));
        assert_eq!(config.request_timeout, Duration::from_millis(50));
    }
}
