//! Configuration management for the file gateway
//!
//! Loads settings from an optional `config.toml` with `FILE_GATEWAY_`
//! environment overrides on top of built-in defaults.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the HTTP listener
    pub bind_address: String,

    /// Port for the HTTP listener
    pub port: u16,

    /// Root directory for stored files; created lazily on first upload
    pub upload_dir: String,

    /// Maximum accepted request body size in MB
    pub max_upload_size_mb: u64,
}

impl ServerConfig {
    /// Load configuration from config.toml (if present) with environment
    /// overrides, e.g. `FILE_GATEWAY_UPLOAD_DIR=/srv/uploads`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("bind_address", "127.0.0.1")?
            .set_default("port", 8080_i64)?
            .set_default("upload_dir", "./uploads")?
            .set_default("max_upload_size_mb", 64_i64)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("FILE_GATEWAY"))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.bind_address.is_empty() {
            return Err(config::ConfigError::Message(
                "bind_address cannot be empty".into(),
            ));
        }

        if self.port == 0 {
            return Err(config::ConfigError::Message("Port cannot be 0".into()));
        }

        if self.upload_dir.is_empty() {
            return Err(config::ConfigError::Message(
                "upload_dir cannot be empty".into(),
            ));
        }

        if self.max_upload_size_mb == 0 {
            return Err(config::ConfigError::Message(
                "max_upload_size_mb must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get bind address and port as socket address
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Get the upload directory as PathBuf
    pub fn upload_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.upload_dir)
    }

    /// Get maximum request body size in bytes
    pub fn max_upload_size_bytes(&self) -> usize {
        (self.max_upload_size_mb * 1024 * 1024) as usize
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            upload_dir: "./uploads".to_string(),
            max_upload_size_mb: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_upload_dir_fails_validation() {
        let config = ServerConfig {
            upload_dir: String::new(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_port_fails_validation() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn listen_socket_joins_address_and_port() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_socket(), "127.0.0.1:8080");
    }

    #[test]
    fn max_upload_size_converts_to_bytes() {
        let config = ServerConfig {
            max_upload_size_mb: 2,
            ..ServerConfig::default()
        };
        assert_eq!(config.max_upload_size_bytes(), 2 * 1024 * 1024);
    }
}
