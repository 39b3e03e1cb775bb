//! Server configuration from a TOML file and environment variables.
//!
//! Configuration is resolved in layers: built-in defaults, then an
//! optional `dashboard.toml`, then environment-variable overrides.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default bind host; the dashboard is a local single-operator tool.
const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port, matching the original dashboard.
const DEFAULT_PORT: u16 = 8050;

/// Default path of the bundled sample dataset.
const DEFAULT_DATA_PATH: &str = "data/spacex_launch_dash.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid {var} value '{value}'")]
    InvalidEnv { var: String, value: String },
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        DatasetSettings {
            path: default_data_path(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server: ServerSettings::default(),
            dataset: DatasetSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from `dashboard.toml` in the current or parent
    /// directory; falls back to built-in defaults when no file exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        for path in [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ] {
            if path.exists() {
                return Self::from_file(&path);
            }
        }
        Ok(AppConfig::default())
    }

    /// Apply environment-variable overrides.
    ///
    /// `HOST` and `PORT` override the bind address; `DATA_PATH` overrides
    /// the dataset file path.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "PORT".to_string(),
                value: port,
            })?;
        }
        if let Ok(path) = env::var("DATA_PATH") {
            self.dataset.path = PathBuf::from(path);
        }
        Ok(())
    }

    /// Resolve the full configuration: file (or defaults), then env.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_default_location()?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// The `host:port` string to bind the server to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.dataset.path, PathBuf::from("data/spacex_launch_dash.csv"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8050");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [dataset]
            path = "/srv/launches.csv"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.dataset.path, PathBuf::from("/srv/launches.csv"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let toml = r#"
            [server]
            port = 9000
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.dataset.path, PathBuf::from("data/spacex_launch_dash.csv"));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[server\nport = nope");
        assert!(result.is_err());
    }
}
