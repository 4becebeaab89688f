use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Backend the client talks to when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://murmuring-dusk-30240-f46e356bdd77.herokuapp.com";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Movie backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend (scheme + host, optional path prefix).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// TCP connect timeout in seconds (default: 10).
    ///
    /// Requests themselves are never cut short.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Where the login session is persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Overrides the default session file location.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_connect_timeout() -> u32 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}
