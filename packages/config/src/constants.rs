// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Tagboard

// Server
pub const TAGBOARD_HOST: &str = "TAGBOARD_HOST";
pub const TAGBOARD_PORT: &str = "TAGBOARD_PORT";

// CORS
pub const TAGBOARD_CORS_ORIGIN: &str = "TAGBOARD_CORS_ORIGIN";

// Database
pub const TAGBOARD_DATABASE_URL: &str = "TAGBOARD_DATABASE_URL";
pub const TAGBOARD_DB_MAX_CONNECTIONS: &str = "TAGBOARD_DB_MAX_CONNECTIONS";

// Listing
pub const TAGBOARD_PAGE_SIZE: &str = "TAGBOARD_PAGE_SIZE";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite:tagboard.db";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound for the configured list page size
pub const MAX_PAGE_SIZE: i64 = 100;
