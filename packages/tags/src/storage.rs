// ABOUTME: Tag storage layer using SQLite
// ABOUTME: Filtered paging, existence checks and constraint-backed create, update and delete

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use tagboard_storage::{StorageError, StorageResult};

use crate::store::TagStore;
use crate::types::{NewTag, Tag, TagFilter, TagUpdate, STATE_ENABLED};

pub struct SqliteTagStorage {
    pool: SqlitePool,
}

impl SqliteTagStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a single tag by ID
    pub async fn get_tag(&self, id: i64) -> StorageResult<Option<Tag>> {
        debug!("Fetching tag: {}", id);

        sqlx::query_as::<_, Tag>("SELECT * FROM tags WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)
    }
}

/// Append `WHERE` conditions for every supplied filter field
fn push_filter<'args>(builder: &mut QueryBuilder<'args, Sqlite>, filter: &TagFilter) {
    let mut keyword = " WHERE ";
    if let Some(name) = &filter.name {
        builder.push(keyword).push("name = ").push_bind(name.clone());
        keyword = " AND ";
    }
    if let Some(state) = filter.state {
        builder.push(keyword).push("state = ").push_bind(state);
    }
}

#[async_trait]
impl TagStore for SqliteTagStorage {
    async fn get_tags(
        &self,
        filter: &TagFilter,
        offset: i64,
        limit: i64,
    ) -> StorageResult<Vec<Tag>> {
        let offset = offset.max(0);
        debug!(
            "Fetching tags (filter: {:?}, offset: {}, limit: {})",
            filter, offset, limit
        );

        let mut builder = QueryBuilder::<Sqlite>::new("SELECT * FROM tags");
        push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        builder
            .build_query_as::<Tag>()
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)
    }

    async fn get_tags_total(&self, filter: &TagFilter) -> StorageResult<i64> {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM tags");
        push_filter(&mut builder, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)
    }

    async fn exist_tag_by_name(&self, name: &str) -> StorageResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags WHERE name = ?")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(count > 0)
    }

    async fn exist_tag_by_id(&self, id: i64) -> StorageResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(count > 0)
    }

    async fn create_tag(&self, input: NewTag) -> StorageResult<Tag> {
        let now = Utc::now().timestamp();
        debug!("Creating tag (name: {})", input.name);

        let result = sqlx::query(
            r#"
            INSERT INTO tags (name, state, created_by, modified_by, created_on, modified_on)
            VALUES (?, ?, ?, '', ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(input.state.unwrap_or(STATE_ENABLED))
        .bind(&input.created_by)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, &input.name))?;

        let id = result.last_insert_rowid();
        self.get_tag(id).await?.ok_or(StorageError::NotFound)
    }

    async fn update_tag(&self, id: i64, input: TagUpdate) -> StorageResult<()> {
        if input.is_empty() {
            debug!("Touching tag: {}", id);
        } else {
            debug!("Updating tag: {} ({:?})", id, input);
        }

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE tags SET modified_on = ");
        builder.push_bind(Utc::now().timestamp());

        if let Some(name) = &input.name {
            builder.push(", name = ").push_bind(name.clone());
        }
        if let Some(modified_by) = &input.modified_by {
            builder.push(", modified_by = ").push_bind(modified_by.clone());
        }
        if let Some(state) = input.state {
            builder.push(", state = ").push_bind(state);
        }

        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(&self.pool).await.map_err(|e| {
            StorageError::from_write(e, input.name.as_deref().unwrap_or_default())
        })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn delete_tag(&self, id: i64) -> StorageResult<()> {
        debug!("Deleting tag: {}", id);

        let result = sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
