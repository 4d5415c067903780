//! Server configuration file support.
//!
//! This module provides utilities for reading server configuration from
//! TOML configuration files, with environment variable overrides applied
//! on top of the file values.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Read(String),
    /// The configuration file could not be parsed as TOML.
    #[error("failed to parse config file: {0}")]
    Parse(String),
    /// No configuration file was found in any standard location.
    #[error("no fieldops.toml found in standard locations")]
    NotFound,
}

/// Server configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
}

/// Bind address and startup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host to bind to (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Seed the repository with demo records at startup (default: false)
    #[serde(default)]
    pub seed_demo_data: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_demo_data: false,
        }
    }
}

impl ServerConfig {
    /// Load server configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ServerConfig)` if successful
    /// * `Err(ConfigError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read(e.to_string()))?;

        let config: ServerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// Load server configuration from the default location.
    ///
    /// Searches for `fieldops.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(ServerConfig)` if found and parsed successfully
    /// * `Err(ConfigError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = vec![
            PathBuf::from("fieldops.toml"),
            PathBuf::from("config/fieldops.toml"),
            PathBuf::from("../fieldops.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Apply `HOST`, `PORT`, and `SEED_DEMO_DATA` environment overrides.
    ///
    /// Unset or unparseable variables leave the file values in place.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("SEED_DEMO_DATA").ok(),
        );
    }

    fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<String>,
        seed: Option<String>,
    ) {
        if let Some(host) = host {
            let host = host.trim();
            if !host.is_empty() {
                self.server.host = host.to_string();
            }
        }
        if let Some(port) = port.and_then(|raw| raw.trim().parse().ok()) {
            self.server.port = port;
        }
        if let Some(seed) = seed {
            match seed.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.server.seed_demo_data = true,
                "0" | "false" | "no" => self.server.seed_demo_data = false,
                _ => {}
            }
        }
    }

    /// Bind address in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
