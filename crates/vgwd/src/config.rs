//! TOML configuration for the gateway daemon

use std::time::Duration;

use serde::Deserialize;

fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "http://gmapi.azurewebsites.net".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// Vendor API connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the vendor telemetry API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Top-level daemon configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Vendor API settings
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.upstream.base_url, "http://gmapi.azurewebsites.net");
        assert_eq!(config.upstream.timeout(), Duration::from_secs(30));
        assert_eq!(config.upstream.connect_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_full_config() {
        let config: GatewayConfig = toml::from_str(
            r#"
            port = 8080

            [upstream]
            base_url = "http://localhost:9090"
            timeout_secs = 5
            connect_timeout_secs = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream.base_url, "http://localhost:9090");
        assert_eq!(config.upstream.timeout(), Duration::from_secs(5));
        assert_eq!(config.upstream.connect_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_upstream_section_keeps_other_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [upstream]
            base_url = "http://vendor.example"
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.upstream.base_url, "http://vendor.example");
        assert_eq!(config.upstream.timeout_secs, 30);
    }
}
