//! Application configuration
//!
//! Only the server process is configurable. The tenant and redirect tables
//! are compiled in (see `hostmap_shared::builtin`).

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::Invalid("LOG_FORMAT", s.to_string())),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: SocketAddr,

    // Logging
    pub log_format: LogFormat,
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Self {
            // Server
            bind_address: bind_address
                .parse()
                .map_err(|_| ConfigError::Invalid("BIND_ADDRESS", bind_address.clone()))?,

            // Logging
            log_format: match env::var("LOG_FORMAT") {
                Ok(format) => format.parse()?,
                Err(_) => LogFormat::default(),
            },
            log_filter: env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,hostmap_api=debug,tower_http=info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_format: LogFormat::default(),
            log_filter: "info".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
