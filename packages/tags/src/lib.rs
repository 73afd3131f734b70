// ABOUTME: Tag management for Tagboard
// ABOUTME: Provides the tag model, the storage contract and its SQLite implementation

pub mod storage;
pub mod store;
pub mod types;

// Re-export main types
pub use storage::SqliteTagStorage;
pub use store::TagStore;
pub use types::{
    NewTag, Tag, TagFilter, TagPage, TagUpdate, CREATED_BY_MAX_LEN, MODIFIED_BY_MAX_LEN,
    NAME_MAX_LEN, STATE_DISABLED, STATE_ENABLED,
};
