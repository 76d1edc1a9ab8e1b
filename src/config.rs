// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:9090";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    pub server_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: ClientConfig,
    production: ClientConfig,
}

impl ClientConfig {
    /// Load configuration based on environment
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let mut config = Self::load_from_file(Path::new("config.yaml"), &environment)?;

        // Env var wins over the file
        if let Ok(server_url) = std::env::var("JOBSCOUT_SERVER_URL") {
            info!("Server URL overridden by JOBSCOUT_SERVER_URL: {}", server_url);
            config.server_url = server_url;
        }

        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("JOBSCOUT_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(config_path: &Path, environment: &str) -> Result<Self> {
        if !config_path.exists() {
            info!(
                "Config not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let config_content =
            std::fs::read_to_string(config_path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_the_local_server() {
        let config = ClientConfig::default();
        assert_eq!(config.server_url, "http://127.0.0.1:9090");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config =
            ClientConfig::load_from_file(Path::new("does-not-exist.yaml"), "local").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_environment_selects_its_section() {
        let yaml = r#"
local:
  server_url: http://127.0.0.1:9090
production:
  server_url: https://jobscout.example.com
  timeout_seconds: 60
"#;
        let config_file: ConfigFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config_file.local.server_url, "http://127.0.0.1:9090");
        // Omitted timeout takes the default
        assert_eq!(config_file.local.timeout_seconds, 30);
        assert_eq!(
            config_file.production.server_url,
            "https://jobscout.example.com"
        );
        assert_eq!(config_file.production.timeout_seconds, 60);
    }
}
