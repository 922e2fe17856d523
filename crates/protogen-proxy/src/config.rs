//! Environment configuration for the proxy.

use std::env;

use protogen_core::UPSTREAM_ORIGIN;
use thiserror::Error;

/// Default listening port
const DEFAULT_PORT: u16 = 3000;

/// Origins allowed by the CORS policy when `ALLOWED_ORIGINS` is unset
const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["https://sebitrollj.github.io", "http://localhost:5500"];

/// Origin value that matches any site
pub const WILDCARD_ORIGIN: &str = "*";

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `PORT` is not a valid port number
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    /// `ALLOWED_ORIGINS` contains `*`, which cannot be combined with credentials
    #[error("ALLOWED_ORIGINS must list explicit origins, `*` is not allowed with credentials")]
    WildcardOrigin,
}

/// Proxy configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Listening port (`PORT`, default 3000)
    pub port: u16,
    /// Upstream base URL (`UPSTREAM_BASE_URL`, default `https://v2.protogen.fr`)
    pub upstream_base_url: String,
    /// CORS origins (`ALLOWED_ORIGINS`, comma-separated)
    pub allowed_origins: Vec<String>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_base_url: UPSTREAM_ORIGIN.to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        }
    }
}

impl ProxyConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`; unset or blank values keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = get("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Some(base_url) = get("UPSTREAM_BASE_URL") {
            config.upstream_base_url = base_url.trim().to_string();
        }

        if let Some(origins) = get("ALLOWED_ORIGINS") {
            let origins: Vec<String> = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
            if origins.iter().any(|o| o == WILDCARD_ORIGIN) {
                return Err(ConfigError::WildcardOrigin);
            }
            config.allowed_origins = origins;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ProxyConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ProxyConfig::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.upstream_base_url, "https://v2.protogen.fr");
        assert_eq!(
            config.allowed_origins,
            vec!["https://sebitrollj.github.io", "http://localhost:5500"]
        );
    }

    #[test]
    fn test_overrides() {
        let config = ProxyConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("UPSTREAM_BASE_URL", "http://127.0.0.1:9000"),
            ("ALLOWED_ORIGINS", "https://a.example, ,https://b.example "),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_base_url, "http://127.0.0.1:9000");
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = ProxyConfig::from_lookup(lookup_from(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_port() {
        let result = ProxyConfig::from_lookup(lookup_from(&[("PORT", "http")]));
        match result {
            Err(ConfigError::InvalidPort(value)) => assert_eq!(value, "http"),
            other => panic!("Expected InvalidPort error, got {:?}", other),
        }
    }

    #[test]
    fn test_wildcard_origin_rejected() {
        for value in ["*", "https://a.example, *"] {
            let result = ProxyConfig::from_lookup(lookup_from(&[("ALLOWED_ORIGINS", value)]));
            assert!(
                matches!(result, Err(ConfigError::WildcardOrigin)),
                "{value:?} should be rejected, got {result:?}"
            );
        }
    }
}
