// ABOUTME: Storage error type shared by every persistence layer
// ABOUTME: Wraps sqlx and IO failures and carries not-found and uniqueness conflicts

use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Record not found")]
    NotFound,
    #[error("Duplicate name: {0}")]
    DuplicateName(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Translate a unique constraint violation into `DuplicateName`, pass anything else through
    pub fn from_write(err: sqlx::Error, name: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StorageError::DuplicateName(name.to_string())
            }
            _ => StorageError::Sqlx(err),
        }
    }
}
