// ABOUTME: Storage contract consumed by the tag request handlers
// ABOUTME: Lets handlers run against SQLite in production and mocks in tests

use async_trait::async_trait;
use tagboard_storage::StorageResult;

use crate::types::{NewTag, Tag, TagFilter, TagUpdate};

/// Persistence operations for tags.
///
/// Implementations own uniqueness and existence: `create_tag` and `update_tag`
/// fail with `StorageError::DuplicateName` when the name is taken, and
/// `update_tag`/`delete_tag` fail with `StorageError::NotFound` when no row
/// matched, regardless of any earlier existence check.
#[async_trait]
pub trait TagStore: Send + Sync {
    /// One page of tags matching `filter`, ordered by id
    async fn get_tags(&self, filter: &TagFilter, offset: i64, limit: i64)
        -> StorageResult<Vec<Tag>>;

    /// Count of all tags matching `filter`, ignoring pagination
    async fn get_tags_total(&self, filter: &TagFilter) -> StorageResult<i64>;

    async fn exist_tag_by_name(&self, name: &str) -> StorageResult<bool>;

    async fn exist_tag_by_id(&self, id: i64) -> StorageResult<bool>;

    async fn create_tag(&self, input: NewTag) -> StorageResult<Tag>;

    async fn update_tag(&self, id: i64, input: TagUpdate) -> StorageResult<()>;

    /// Hard delete
    async fn delete_tag(&self, id: i64) -> StorageResult<()>;
}
