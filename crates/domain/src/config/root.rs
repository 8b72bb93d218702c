use serde::Deserialize;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::zones::{ReloadMode, ZonesConfig};

/// Main configuration structure for authdns
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// UDP listener configuration (bind address, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// Zone data location and reload policy
    #[serde(default)]
    pub zones: ZonesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. authdns.toml in current directory
    /// 3. /etc/authdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(dir) = overrides.zones_directory {
            self.zones.directory = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        // A datagram must at least hold the fixed header.
        if self.server.max_message_size < 12 {
            return Err(ConfigError::Validation(format!(
                "max_message_size must be at least 12 bytes, got {}",
                self.server.max_message_size
            )));
        }

        if self.zones.directory.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Zone directory cannot be empty".to_string(),
            ));
        }

        if self.zones.reload == ReloadMode::Interval && self.zones.reload_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "reload_interval_secs must be greater than 0 for interval reload".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("authdns.toml").exists() {
            Some("authdns.toml".to_string())
        } else if std::path::Path::new("/etc/authdns/config.toml").exists() {
            Some("/etc/authdns/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub zones_directory: Option<String>,
    pub log_level: Option<String>,
}
