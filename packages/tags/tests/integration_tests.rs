// ABOUTME: Integration tests for tag storage operations
// ABOUTME: Tests filtering, pagination, partial updates, hard deletes and uniqueness translation

use pretty_assertions::assert_eq;
use tagboard_storage::{init_pool, StorageConfig, StorageError};
use tagboard_tags::{
    NewTag, SqliteTagStorage, TagFilter, TagStore, TagUpdate, STATE_DISABLED, STATE_ENABLED,
};

/// Helper to create an in-memory store with the schema applied
async fn create_test_storage() -> SqliteTagStorage {
    let pool = init_pool(&StorageConfig::in_memory()).await.unwrap();
    SqliteTagStorage::new(pool)
}

fn new_tag(name: &str, created_by: &str) -> NewTag {
    NewTag {
        name: name.to_string(),
        created_by: created_by.to_string(),
        state: None,
    }
}

fn by_name(name: &str) -> TagFilter {
    TagFilter {
        name: Some(name.to_string()),
        state: None,
    }
}

#[tokio::test]
async fn test_create_tag() {
    let storage = create_test_storage().await;

    let tag = storage.create_tag(new_tag("go", "alice")).await.unwrap();

    assert!(tag.id >= 1);
    assert_eq!(tag.name, "go");
    assert_eq!(tag.created_by, "alice");
    assert_eq!(tag.modified_by, "");
    assert_eq!(tag.state, STATE_ENABLED);
    assert!(tag.created_on > 0);
    assert_eq!(tag.created_on, tag.modified_on);
}

#[tokio::test]
async fn test_create_tag_with_explicit_state() {
    let storage = create_test_storage().await;

    let input = NewTag {
        state: Some(STATE_DISABLED),
        ..new_tag("archived", "alice")
    };
    let tag = storage.create_tag(input).await.unwrap();

    assert_eq!(tag.state, STATE_DISABLED);
}

#[tokio::test]
async fn test_create_duplicate_name_is_rejected_by_store() {
    let storage = create_test_storage().await;

    storage.create_tag(new_tag("rust", "alice")).await.unwrap();
    let err = storage.create_tag(new_tag("rust", "bob")).await.unwrap_err();

    assert!(matches!(err, StorageError::DuplicateName(ref name) if name == "rust"));
    assert_eq!(storage.get_tags_total(&TagFilter::default()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_exist_tag_by_name_and_id() {
    let storage = create_test_storage().await;

    let tag = storage.create_tag(new_tag("docs", "alice")).await.unwrap();

    assert!(storage.exist_tag_by_name("docs").await.unwrap());
    assert!(!storage.exist_tag_by_name("Docs").await.unwrap());
    assert!(storage.exist_tag_by_id(tag.id).await.unwrap());
    assert!(!storage.exist_tag_by_id(tag.id + 100).await.unwrap());
}

#[tokio::test]
async fn test_list_tags_with_filters() {
    let storage = create_test_storage().await;

    storage.create_tag(new_tag("feature", "alice")).await.unwrap();
    storage.create_tag(new_tag("bug", "bob")).await.unwrap();
    storage
        .create_tag(NewTag {
            state: Some(STATE_DISABLED),
            ..new_tag("legacy", "carol")
        })
        .await
        .unwrap();

    let all = storage.get_tags(&TagFilter::default(), 0, 10).await.unwrap();
    assert_eq!(
        all.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        vec!["feature", "bug", "legacy"]
    );

    let named = storage.get_tags(&by_name("bug"), 0, 10).await.unwrap();
    assert_eq!(named.len(), 1);
    assert_eq!(named[0].created_by, "bob");

    let enabled = TagFilter {
        name: None,
        state: Some(STATE_ENABLED),
    };
    assert_eq!(storage.get_tags(&enabled, 0, 10).await.unwrap().len(), 2);
    assert_eq!(storage.get_tags_total(&enabled).await.unwrap(), 2);

    let both = TagFilter {
        name: Some("legacy".to_string()),
        state: Some(STATE_ENABLED),
    };
    assert!(storage.get_tags(&both, 0, 10).await.unwrap().is_empty());
    assert_eq!(storage.get_tags_total(&both).await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_tags_paginated() {
    let storage = create_test_storage().await;

    for i in 0..5 {
        storage
            .create_tag(new_tag(&format!("tag{}", i), "alice"))
            .await
            .unwrap();
    }

    let filter = TagFilter::default();

    let page1 = storage.get_tags(&filter, 0, 2).await.unwrap();
    assert_eq!(page1.len(), 2);
    assert_eq!(page1[0].name, "tag0");

    let page3 = storage.get_tags(&filter, 4, 2).await.unwrap();
    assert_eq!(page3.len(), 1);
    assert_eq!(page3[0].name, "tag4");

    let beyond = storage.get_tags(&filter, 10, 2).await.unwrap();
    assert!(beyond.is_empty());

    // Total ignores pagination
    assert_eq!(storage.get_tags_total(&filter).await.unwrap(), 5);
}

#[tokio::test]
async fn test_negative_offset_reads_first_page() {
    let storage = create_test_storage().await;

    for name in ["a", "b", "c"] {
        storage.create_tag(new_tag(name, "alice")).await.unwrap();
    }

    let tags = storage.get_tags(&TagFilter::default(), -2, 2).await.unwrap();
    assert_eq!(
        tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        vec!["a", "b"]
    );
}

#[tokio::test]
async fn test_update_tag_only_touches_supplied_fields() {
    let storage = create_test_storage().await;

    let tag = storage.create_tag(new_tag("old", "alice")).await.unwrap();

    storage
        .update_tag(
            tag.id,
            TagUpdate {
                modified_by: Some("bob".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let updated = storage.get_tag(tag.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "old");
    assert_eq!(updated.modified_by, "bob");
    assert_eq!(updated.created_by, "alice");
    assert_eq!(updated.state, STATE_ENABLED);

    storage
        .update_tag(
            tag.id,
            TagUpdate {
                name: Some("new".to_string()),
                modified_by: Some("carol".to_string()),
                state: Some(STATE_DISABLED),
            },
        )
        .await
        .unwrap();

    let renamed = storage.get_tag(tag.id).await.unwrap().unwrap();
    assert_eq!(renamed.name, "new");
    assert_eq!(renamed.modified_by, "carol");
    assert_eq!(renamed.state, STATE_DISABLED);
    assert!(renamed.modified_on >= tag.modified_on);
}

#[tokio::test]
async fn test_empty_update_on_existing_tag_succeeds() {
    let storage = create_test_storage().await;

    let tag = storage.create_tag(new_tag("noop", "alice")).await.unwrap();
    storage.update_tag(tag.id, TagUpdate::default()).await.unwrap();

    let unchanged = storage.get_tag(tag.id).await.unwrap().unwrap();
    assert_eq!(unchanged.name, "noop");
    assert_eq!(unchanged.modified_by, "");
}

#[tokio::test]
async fn test_update_missing_tag_is_not_found() {
    let storage = create_test_storage().await;

    let err = storage
        .update_tag(
            42,
            TagUpdate {
                modified_by: Some("bob".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn test_rename_onto_existing_name_is_duplicate() {
    let storage = create_test_storage().await;

    storage.create_tag(new_tag("first", "alice")).await.unwrap();
    let second = storage.create_tag(new_tag("second", "alice")).await.unwrap();

    let err = storage
        .update_tag(
            second.id,
            TagUpdate {
                name: Some("first".to_string()),
                modified_by: Some("bob".to_string()),
                state: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::DuplicateName(ref name) if name == "first"));
    let kept = storage.get_tag(second.id).await.unwrap().unwrap();
    assert_eq!(kept.name, "second");
}

#[tokio::test]
async fn test_delete_tag() {
    let storage = create_test_storage().await;

    let tag = storage.create_tag(new_tag("temp", "alice")).await.unwrap();
    storage.delete_tag(tag.id).await.unwrap();

    assert!(!storage.exist_tag_by_id(tag.id).await.unwrap());
    assert!(storage.get_tag(tag.id).await.unwrap().is_none());

    // Hard delete frees the name
    storage.create_tag(new_tag("temp", "bob")).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_tag_is_not_found() {
    let storage = create_test_storage().await;

    let err = storage.delete_tag(7).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound));
}
