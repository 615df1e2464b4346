//! Application configuration.
//!
//! Settings are read from a TOML file and then overridden by environment
//! variables:
//!
//! ```toml
//! api_key = "MY-KEY"
//! model_server_base_url = "http://localhost:3001/api/v1"
//! stream = true
//! stream_timeout = 15
//! workspace_slug = "todo"
//! ```
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `SMART_TODO_API_KEY` | `api_key` |
//! | `SMART_TODO_BASE_URL` | `model_server_base_url` |
//! | `SMART_TODO_WORKSPACE` | `workspace_slug` |
//! | `SMART_TODO_TIMEOUT` | `stream_timeout` |

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::traits::Headers;

/// File name searched for in the working directory and the user config dir.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "smart-todo";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_SESSION_ID: &str = "todo-session-id";

pub const ENV_API_KEY: &str = "SMART_TODO_API_KEY";
pub const ENV_BASE_URL: &str = "SMART_TODO_BASE_URL";
pub const ENV_WORKSPACE: &str = "SMART_TODO_WORKSPACE";
pub const ENV_TIMEOUT: &str = "SMART_TODO_TIMEOUT";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_session_id() -> String {
    DEFAULT_SESSION_ID.to_string()
}

/// Connection settings for the LLM workspace API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Bearer token for the API
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the API, e.g. `http://localhost:3001/api/v1`
    #[serde(default = "default_base_url")]
    pub model_server_base_url: String,
    /// Use the `stream-chat` endpoint instead of `chat`
    #[serde(default = "default_true")]
    pub stream: bool,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub stream_timeout: u64,
    /// Workspace the chat is sent to
    #[serde(default)]
    pub workspace_slug: String,
    /// Chat session id sent with every request
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model_server_base_url: default_base_url(),
            stream: true,
            stream_timeout: DEFAULT_TIMEOUT_SECS,
            workspace_slug: String::new(),
            session_id: default_session_id(),
        }
    }
}

impl AppConfig {
    /// Parse a config from TOML text. `origin` is only used in errors.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load the effective configuration.
    ///
    /// Uses `explicit` if given, otherwise the first existing file from
    /// [`default_config_paths`], otherwise built-in defaults. Environment
    /// overrides are applied last, then the result is validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_paths().into_iter().find(|p| p.is_file()) {
                Some(path) => {
                    tracing::debug!("Loading config from {}", path.display());
                    Self::from_file(&path)?
                }
                None => {
                    tracing::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally `std::env::var`).
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = key;
        }
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.model_server_base_url = url;
        }
        if let Some(slug) = lookup(ENV_WORKSPACE) {
            self.workspace_slug = slug;
        }
        if let Some(value) = lookup(ENV_TIMEOUT) {
            self.stream_timeout = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv {
                    name: ENV_TIMEOUT,
                    value,
                })?;
        }
        Ok(())
    }

    /// Check that the settings can form a request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_server_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "model_server_base_url must not be empty".to_string(),
            ));
        }
        if self.workspace_slug.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "workspace_slug must be set (in {} or {})",
                CONFIG_FILE_NAME, ENV_WORKSPACE
            )));
        }
        if self.stream_timeout == 0 {
            return Err(ConfigError::Invalid(
                "stream_timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    /// The chat endpoint for the configured mode.
    pub fn chat_url(&self) -> String {
        let base = self.model_server_base_url.trim_end_matches('/');
        let endpoint = if self.stream { "stream-chat" } else { "chat" };
        format!("{}/workspace/{}/{}", base, self.workspace_slug, endpoint)
    }

    /// Headers sent with every chat request.
    pub fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("accept".to_string(), "application/json".to_string());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        );
        headers
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.stream_timeout)
    }
}

/// Candidate config file locations, in lookup order.
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    paths
}
