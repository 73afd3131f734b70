// ABOUTME: Data layer and persistence for Tagboard
// ABOUTME: Owns the SQLite pool bootstrap, embedded migrations and the shared storage error type

pub mod error;
pub mod pool;

pub use error::{StorageError, StorageResult};
pub use pool::{init_pool, StorageConfig};
