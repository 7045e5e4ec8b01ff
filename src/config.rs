use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL of the Asana v1 REST API.
pub const DEFAULT_BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Environment variable consulted by [`Config::from_env`].
pub const TOKEN_ENV_VAR: &str = "TASKPULL_TOKEN";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration for a single adapter instance.
///
/// Supplied explicitly by the caller; there is no process-wide token state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub base_url: String,
    pub token: String,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: String::new(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Creates a config with the given bearer token and default endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Reads the bearer token from `TASKPULL_TOKEN`, if set.
    pub fn from_env() -> Option<Self> {
        std::env::var(TOKEN_ENV_VAR).ok().map(Self::new)
    }

    /// Overrides the service base URL (no trailing slash).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_asana_api() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://app.asana.com/api/1.0");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.token.is_empty());
    }

    #[test]
    fn new_sets_token_and_keeps_defaults() {
        let config = Config::new("secret");
        assert_eq!(config.token, "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn with_base_url_overrides_endpoint() {
        let config = Config::new("secret").with_base_url("http://127.0.0.1:9000");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.token, "secret");
    }
}
