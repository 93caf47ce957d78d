//! Configuration types for the greeter service

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub request: RequestConfig,
    #[serde(default)]
    pub page: PageConfig,
}

/// Outbound hello request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Inline API key; takes precedence over `api_key_env`
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl RequestConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            api_key_env: default_api_key_env(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Welcome page server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_page_port")]
    pub port: u16,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: default_page_port(),
        }
    }
}

impl Config {
    /// Reject settings that would make the request impossible to complete
    pub fn validate(&self) -> crate::Result<()> {
        if self.request.timeout_seconds == 0 {
            return Err(crate::GreeterError::Config(
                "request.timeout_seconds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the API key, falling back to the configured environment variable.
    ///
    /// Empty values are treated as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Like [`Config::resolve_api_key`] with an injectable environment lookup
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = self.request.api_key.as_deref().filter(|k| !k.is_empty()) {
            tracing::debug!("Using API key from configuration file");
            return Some(key.to_string());
        }

        match lookup(&self.request.api_key_env).filter(|k| !k.is_empty()) {
            Some(key) => {
                tracing::debug!("Using API key from ${}", self.request.api_key_env);
                Some(key)
            }
            None => {
                tracing::debug!("No API key in config or ${}", self.request.api_key_env);
                None
            }
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5001/api/hello".to_string()
}

fn default_api_key_env() -> String {
    "GREETER_API_KEY".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_page_port() -> u16 {
    5173
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::GreeterError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
