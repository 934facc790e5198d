//! Client configuration
//!
//! A [`ClientConfig`] holds everything a request reads besides its own
//! parameters: the API key, the response format, where the API lives and
//! how long to wait for it. Each [`SteamClient`](crate::client::SteamClient)
//! owns its config, so differently configured clients can coexist.

use crate::error::{Error, Result};
use crate::types::ResponseFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default origin of the Steam Web API
pub const STEAM_API_BASE_URL: &str = "https://api.steampowered.com/";

/// Length of a Steam Web API key
pub const API_KEY_LENGTH: usize = 32;

// ============================================================================
// API Key
// ============================================================================

/// A Steam Web API key. Opaque, exactly 32 characters.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate and wrap a key
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let len = key.chars().count();
        if len != API_KEY_LENGTH {
            return Err(Error::invalid_config(
                "api_key",
                format!("expected {API_KEY_LENGTH} characters, got {len}"),
            ));
        }
        Ok(Self(key))
    }

    /// The key as sent on the wire
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for a Steam Web API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key injected into endpoints that need one
    pub api_key: Option<ApiKey>,
    /// Response format requested and decoded
    pub format: ResponseFormat,
    /// Origin all endpoint paths are appended to
    pub base_url: String,
    /// Upper bound on one request, send to decoded body
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            format: ResponseFormat::Json,
            base_url: STEAM_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("steam-webapi/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Set the response format by wire name (`json`, `xml` or `vdf`).
    ///
    /// Returns false and leaves the current format in place when the name
    /// is not recognised.
    pub fn set_format(&mut self, format: &str) -> bool {
        match format.parse() {
            Ok(format) => {
                self.format = format;
                true
            }
            Err(_) => false,
        }
    }

    /// Set the API key.
    ///
    /// Returns false and keeps the previous key unless the input is exactly
    /// 32 characters.
    pub fn set_api_key(&mut self, key: &str) -> bool {
        match ApiKey::new(key) {
            Ok(key) => {
                self.api_key = Some(key);
                true
            }
            Err(_) => false,
        }
    }

    /// Whether an API key has been configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Load config from `STEAM_API_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load config from any name → value lookup using the environment
    /// variable names
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = ConfigFile {
            api_key: lookup("STEAM_API_KEY"),
            format: lookup("STEAM_API_FORMAT"),
            base_url: lookup("STEAM_API_BASE_URL"),
            timeout_secs: lookup("STEAM_API_TIMEOUT_SECS")
                .map(|s| {
                    s.trim().parse::<u64>().map_err(|e| {
                        Error::invalid_config("STEAM_API_TIMEOUT_SECS", e.to_string())
                    })
                })
                .transpose()?,
            user_agent: lookup("STEAM_API_USER_AGENT"),
        };
        file.into_config()
    }

    /// Load config from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(yaml)?;
        file.into_config()
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
    api_key: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the API key (validated on `build`)
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the response format
    pub fn format(mut self, format: ResponseFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> Result<ClientConfig> {
        let mut config = self.config;
        if let Some(key) = self.api_key {
            config.api_key = Some(ApiKey::new(key)?);
        }
        Ok(config)
    }
}

// ============================================================================
// Config File
// ============================================================================

/// On-disk / environment shape of the config, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    user_agent: Option<String>,
}

impl ConfigFile {
    fn into_config(self) -> Result<ClientConfig> {
        let mut builder = ClientConfig::builder();

        if let Some(key) = self.api_key.filter(|k| !k.is_empty()) {
            builder = builder.api_key(key);
        }
        if let Some(format) = self.format {
            builder = builder.format(format.trim().parse()?);
        }
        if let Some(url) = self.base_url {
            if url.trim().is_empty() {
                return Err(Error::invalid_config("base_url", "must not be empty"));
            }
            builder = builder.base_url(url);
        }
        if let Some(secs) = self.timeout_secs {
            if secs == 0 {
                return Err(Error::invalid_config("timeout_secs", "must be positive"));
            }
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const KEY: &str = "0123456789ABCDEF0123456789ABCDEF";

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.format, ResponseFormat::Json);
        assert_eq!(config.base_url, STEAM_API_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_set_api_key_requires_32_chars() {
        let mut config = ClientConfig::default();
        assert!(config.set_api_key(KEY));
        assert_eq!(config.api_key.as_ref().map(ApiKey::expose), Some(KEY));

        assert!(!config.set_api_key("too-short"));
        assert!(!config.set_api_key(&format!("{KEY}X")));
        assert!(!config.set_api_key(""));
        assert_eq!(config.api_key.as_ref().map(ApiKey::expose), Some(KEY));
    }

    #[test]
    fn test_set_format() {
        let mut config = ClientConfig::default();
        assert!(config.set_format("xml"));
        assert_eq!(config.format, ResponseFormat::Xml);

        assert!(!config.set_format("yaml"));
        assert_eq!(config.format, ResponseFormat::Xml);

        assert!(config.set_format("vdf"));
        assert!(config.set_format("vdf"));
        assert_eq!(config.format, ResponseFormat::Vdf);
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new(KEY).unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(****)");
    }

    #[test]
    fn test_builder_rejects_bad_key() {
        let err = ClientConfig::builder().api_key("nope").build().unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "api_key"));
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("STEAM_API_KEY", KEY),
            ("STEAM_API_FORMAT", "xml"),
            ("STEAM_API_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();

        let config =
            ClientConfig::from_lookup(|name| vars.get(name).map(|v| (*v).to_string())).unwrap();
        assert!(config.has_api_key());
        assert_eq!(config.format, ResponseFormat::Xml);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.base_url, STEAM_API_BASE_URL);
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err = ClientConfig::from_lookup(|name| {
            (name == "STEAM_API_TIMEOUT_SECS").then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = format!(
            "api_key: {KEY}\nformat: vdf\nbase_url: http://localhost:8080/\ntimeout_secs: 2\n"
        );
        let config = ClientConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(config.format, ResponseFormat::Vdf);
        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_from_yaml_str_errors() {
        assert!(matches!(
            ClientConfig::from_yaml_str("format: csv\n").unwrap_err(),
            Error::InvalidConfigValue { .. }
        ));
        assert!(matches!(
            ClientConfig::from_yaml_str("unknown_field: 1\n").unwrap_err(),
            Error::YamlParse(_)
        ));
        assert!(matches!(
            ClientConfig::from_yaml_str("timeout_secs: 0\n").unwrap_err(),
            Error::InvalidConfigValue { .. }
        ));
    }
}
