// ABOUTME: SQLite connection pool bootstrap
// ABOUTME: Creates the database file, applies connection settings and runs embedded migrations

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};

/// Connection settings for the SQLite pool
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:tagboard.db".to_string(),
            max_connections: 10,
            acquire_timeout_secs: 30,
        }
    }
}

impl StorageConfig {
    pub fn new(database_url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections,
            ..Self::default()
        }
    }

    /// Private in-memory database, used by tests
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:", 1)
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

/// Open the pool and bring the schema up to date
pub async fn init_pool(config: &StorageConfig) -> StorageResult<SqlitePool> {
    debug!("Connecting to database: {}", config.database_url);

    let mut options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(StorageError::Sqlx)?
        .foreign_keys(true);

    let pool_options = if config.is_in_memory() {
        // Every connection to :memory: is a separate database, so keep exactly one alive
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        options = options
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await
        .map_err(StorageError::Sqlx)?;

    info!("Database connection established");

    sqlx::migrate!("./migrations").run(&pool).await?;

    debug!("Database migrations applied");

    Ok(pool)
}
