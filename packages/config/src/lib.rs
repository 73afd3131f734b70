// ABOUTME: Configuration and environment variable management for Tagboard
// ABOUTME: Loads server, database and listing settings from the environment

pub mod config;
pub mod constants;

pub use config::{Config, ConfigError};
