use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Environment variables that override file or default values
pub const ENV_BASE_URL: &str = "POLYGLOT_BASE_URL";
pub const ENV_APP_ID: &str = "POLYGLOT_APP_ID";
pub const ENV_API_KEY: &str = "POLYGLOT_API_KEY";
pub const ENV_TIMEOUT_SECONDS: &str = "POLYGLOT_TIMEOUT_SECONDS";

/// Connection settings for one `EventClient`.
///
/// Nothing here is validated: a malformed base URL or an empty key only
/// shows up once a request is made. `Debug` output redacts the API key.
#[derive(Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    /// Engine base address (e.g., "http://localhost:4000")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Application (tenant) the channels live under
    #[serde(default = "default_app_id")]
    pub app_id: String,
    /// Sent as the X-API-Key header on every request
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Per-request timeout. Unset means transport defaults.
    /// The loaders reject 0; a config built by hand with 0 gets no timeout.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_app_id() -> String {
    "demo-app".to_string()
}

fn default_api_key() -> String {
    "valid_key_demo-app".to_string()
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("app_id", &self.app_id)
            .field("api_key", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_id: default_app_id(),
            api_key: default_api_key(),
            timeout_seconds: None,
        }
    }
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        app_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            app_id: app_id.into(),
            api_key: api_key.into(),
            timeout_seconds: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Apply POLYGLOT_* environment overrides on top of this config
    pub fn apply_env_overrides(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(app_id) = lookup(ENV_APP_ID) {
            self.app_id = app_id;
        }
        if let Some(api_key) = lookup(ENV_API_KEY) {
            self.api_key = api_key;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECONDS) {
            let secs = timeout.parse::<u64>().with_context(|| {
                format!("{} must be a whole number of seconds", ENV_TIMEOUT_SECONDS)
            })?;
            self.timeout_seconds = Some(secs);
        }
        self.check_timeout()?;
        Ok(self)
    }

    fn check_timeout(&self) -> Result<()> {
        if self.timeout_seconds == Some(0) {
            bail!("timeout_seconds must be at least 1 (leave it unset for no timeout)");
        }
        Ok(())
    }
}

/// Load configuration from TOML file
pub fn load_config(path: &str) -> Result<ClientConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path))?;
    let config: ClientConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file '{}'", path))?;
    config
        .check_timeout()
        .with_context(|| format!("Invalid config file '{}'", path))?;
    Ok(config)
}
