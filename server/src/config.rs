//! Environment-driven configuration for the server binary.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB: &str = "memory";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Runtime settings read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to listen on (`PORT`, default 3000).
    pub port: u16,
    /// Storage connection string (`TODO_DB`, default `memory`).
    pub db: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let db = std::env::var("TODO_DB").unwrap_or_else(|_| DEFAULT_DB.to_string());
        Ok(Self { port, db })
    }
}
