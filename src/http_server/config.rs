//! HTTP Server Configuration
//!
//! Defaults, environment resolution, and the socket address. CLI flags
//! override environment values; environment overrides defaults.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid environment value
#[derive(Debug, Clone, Error)]
#[error("invalid {name} value: {value}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 4000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory uploads are written to (default: "./uploads")
    #[serde(default = "default_media_dir")]
    pub media_dir: PathBuf,

    /// Serve a uniformly random course instead of the first one on
    /// `GET /api/v1/course` (default: off, deterministic)
    #[serde(default)]
    pub random_pick: bool,

    /// CORS allowed origins; empty means permissive (development)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_media_dir() -> PathBuf {
    PathBuf::from("./uploads")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            media_dir: default_media_dir(),
            random_pick: false,
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Resolve configuration from the environment.
    ///
    /// Reads `PORT` (default 4000), `COURSEBASE_HOST`,
    /// `COURSEBASE_MEDIA_DIR`, and `COURSEBASE_RANDOM_PICK`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(port) = env::var("PORT") {
            config.port = port.parse().map_err(|_| ConfigError {
                name: "PORT",
                value: port.clone(),
            })?;
        }

        if let Ok(host) = env::var("COURSEBASE_HOST") {
            config.host = host;
        }

        if let Ok(dir) = env::var("COURSEBASE_MEDIA_DIR") {
            config.media_dir = PathBuf::from(dir);
        }

        if let Ok(flag) = env::var("COURSEBASE_RANDOM_PICK") {
            config.random_pick = matches!(flag.as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
