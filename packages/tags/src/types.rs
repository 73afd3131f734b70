// ABOUTME: Tag type definitions
// ABOUTME: The stored tag record plus typed filter, insert and partial-update options

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const NAME_MAX_LEN: usize = 20;
pub const CREATED_BY_MAX_LEN: usize = 15;
pub const MODIFIED_BY_MAX_LEN: usize = 15;

pub const STATE_DISABLED: i32 = 0;
pub const STATE_ENABLED: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    /// 1 = enabled, 0 = disabled
    pub state: i32,
    pub created_by: String,
    pub modified_by: String,
    /// Unix seconds
    pub created_on: i64,
    /// Unix seconds
    pub modified_on: i64,
}

/// Conditions for listing tags. Only `Some` fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    /// Exact match
    pub name: Option<String>,
    pub state: Option<i32>,
}

impl TagFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.state.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
    pub created_by: String,
    /// Defaults to enabled when absent
    pub state: Option<i32>,
}

/// Partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagUpdate {
    pub name: Option<String>,
    pub modified_by: Option<String>,
    pub state: Option<i32>,
}

impl TagUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.modified_by.is_none() && self.state.is_none()
    }
}

/// One page of tags plus the unpaginated count for the same filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPage {
    pub list: Vec<Tag>,
    pub total: i64,
}
