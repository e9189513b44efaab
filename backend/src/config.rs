//! Server configuration.
//!
//! Settings come from built-in defaults, optionally overridden by a TOML file
//! and then by environment variables.
//!
//! # Configuration file
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//! ephemeris = "vsop87"
//! ```
//!
//! # Environment Variables
//!
//! - `PLANET_TRACKER_CONFIG`: path to the TOML file (default: `planet-tracker.toml` if present)
//! - `HOST`: bind host
//! - `PORT`: bind port
//! - `EPHEMERIS_MODEL`: ephemeris model name

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::ephemeris::EphemerisModel;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CONFIG_FILE: &str = "planet-tracker.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Configuration file layout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerSettings,
}

/// `[server]` table; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSettings {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub ephemeris: Option<String>,
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub ephemeris: EphemerisModel,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            ephemeris: EphemerisModel::default(),
        }
    }
}

impl ConfigFile {
    /// Load a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ServerConfig {
    /// Load configuration from the default sources.
    ///
    /// An explicitly named file (`PLANET_TRACKER_CONFIG`) must exist; the
    /// default file is only read when present.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match env::var("PLANET_TRACKER_CONFIG") {
            Ok(path) => Some(ConfigFile::from_file(path)?),
            Err(_) => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Some(ConfigFile::from_file(&default_path)?)
                } else {
                    None
                }
            }
        };

        let mut config = Self::default();
        if let Some(file) = file {
            config.apply_file(&file)?;
        }
        config.apply_overrides(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("EPHEMERIS_MODEL").ok(),
        )?;
        Ok(config)
    }

    /// Apply the values present in a configuration file.
    pub fn apply_file(&mut self, file: &ConfigFile) -> Result<(), ConfigError> {
        if let Some(host) = &file.server.host {
            self.host = host.clone();
        }
        if let Some(port) = file.server.port {
            self.port = port;
        }
        if let Some(name) = &file.server.ephemeris {
            self.ephemeris = parse_model(name)?;
        }
        Ok(())
    }

    /// Apply environment-style string overrides.
    pub fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<String>,
        ephemeris: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("'{}' is not a valid port number", port),
            })?;
        }
        if let Some(name) = ephemeris {
            self.ephemeris = parse_model(&name)?;
        }
        Ok(())
    }

    /// Socket address to bind.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                key: "HOST".to_string(),
                message: format!("{}", e),
            })
    }
}

fn parse_model(name: &str) -> Result<EphemerisModel, ConfigError> {
    name.parse().map_err(|e: crate::ephemeris::EphemerisError| ConfigError::InvalidValue {
        key: "ephemeris".to_string(),
        message: e.to_string(),
    })
}
