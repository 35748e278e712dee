//! Client configuration: API root, access key and request timeout.

use std::time::Duration;

/// Production API root.
pub const DEFAULT_API_ROOT: &str = "https://api.countrylayer.com/v2";

/// Environment variable overriding the API root.
pub const ENV_API_ROOT: &str = "RESTCOUNTRIES_API_ROOT";
/// Environment variable holding the access key.
pub const ENV_API_KEY: &str = "RESTCOUNTRIES_API_KEY";
/// Environment variable holding the request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "RESTCOUNTRIES_TIMEOUT_SECS";

/// Settings read on every request. Set once before issuing queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    pub api_root: String,
    /// Sent as `access_key` when present and non-empty.
    pub api_key: Option<String>,
    /// Per-request deadline. `None` or zero leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            api_key: None,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Builds a configuration from `RESTCOUNTRIES_*` environment variables,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(root) = env_string(ENV_API_ROOT) {
            config.api_root = root;
        }
        config.api_key = env_string(ENV_API_KEY);
        if let Some(raw) = env_string(ENV_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                Err(e) => tracing::warn!("Ignoring {}={:?}: {}", ENV_TIMEOUT_SECS, raw, e),
            }
        }
        config
    }

    /// The access key, if one is configured and non-empty.
    pub(crate) fn access_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|val| !val.trim().is_empty())
}
