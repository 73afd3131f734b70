// ABOUTME: Runtime configuration loaded from environment variables
// ABOUTME: Validates ports and page size before the server starts

use std::env;
use std::num::ParseIntError;

use thiserror::Error;
use tracing::debug;

use crate::constants::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[source] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid page size '{0}': must be an integer between 1 and 100")]
    InvalidPageSize(String),
    #[error("Invalid max connections '{0}': must be a positive integer")]
    InvalidMaxConnections(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Fixed number of tags returned per list page
    pub page_size: i64,
    /// Allowed CORS origin; `None` allows any origin
    pub cors_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            page_size: DEFAULT_PAGE_SIZE,
            cors_origin: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup(TAGBOARD_HOST)
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup(TAGBOARD_PORT) {
            Some(raw) => parse_port(&raw)?,
            None => defaults.port,
        };

        let database_url = lookup(TAGBOARD_DATABASE_URL)
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(defaults.database_url);

        let db_max_connections = match lookup(TAGBOARD_DB_MAX_CONNECTIONS) {
            Some(raw) => parse_max_connections(&raw)?,
            None => defaults.db_max_connections,
        };

        let page_size = match lookup(TAGBOARD_PAGE_SIZE) {
            Some(raw) => parse_page_size(&raw)?,
            None => defaults.page_size,
        };

        let cors_origin = lookup(TAGBOARD_CORS_ORIGIN).filter(|o| !o.trim().is_empty());

        let config = Config {
            host,
            port,
            database_url,
            db_max_connections,
            page_size,
            cors_origin,
        };
        debug!("Loaded configuration: {:?}", config);

        Ok(config)
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    let port = raw.trim().parse::<u16>().map_err(ConfigError::InvalidPort)?;
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }
    Ok(port)
}

pub fn parse_page_size(raw: &str) -> Result<i64, ConfigError> {
    match raw.trim().parse::<i64>() {
        Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => Ok(size),
        _ => Err(ConfigError::InvalidPageSize(raw.to_string())),
    }
}

fn parse_max_connections(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidMaxConnections(raw.to_string())),
    }
}
