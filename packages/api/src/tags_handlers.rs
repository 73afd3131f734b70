// ABOUTME: HTTP request handlers for tag operations
// ABOUTME: Validates list/create/update/delete requests and maps storage outcomes to result codes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::{error, info, instrument, warn, Span};

use tagboard_storage::{StorageError, StorageResult};
use tagboard_tags::{
    NewTag, TagFilter, TagPage, TagStore, TagUpdate, CREATED_BY_MAX_LEN, MODIFIED_BY_MAX_LEN,
    NAME_MAX_LEN, STATE_DISABLED, STATE_ENABLED,
};

use crate::params::{FormParams, Params, QueryParams};
use crate::response::{ApiResponse, EmptyData, ResultCode};
use crate::validation::Validation;

/// Query string of `GET /tags`
#[derive(Debug, Default)]
pub struct ListTagsQuery {
    pub name: Option<String>,
    pub state: Option<String>,
    pub page: Option<String>,
}

impl From<&Params> for ListTagsQuery {
    fn from(params: &Params) -> Self {
        Self {
            name: params.get_owned("name"),
            state: params.get_owned("state"),
            page: params.get_owned("page"),
        }
    }
}

/// Form body of `POST /tags`
#[derive(Debug, Default)]
pub struct CreateTagForm {
    pub name: Option<String>,
    pub created_by: Option<String>,
    pub state: Option<String>,
}

impl From<&Params> for CreateTagForm {
    fn from(params: &Params) -> Self {
        Self {
            name: params.get_owned("name"),
            created_by: params.get_owned("created_by"),
            state: params.get_owned("state"),
        }
    }
}

/// Query string of `PUT /tags/{id}`
#[derive(Debug, Default)]
pub struct UpdateTagQuery {
    pub name: Option<String>,
    pub modified_by: Option<String>,
    pub state: Option<String>,
}

impl From<&Params> for UpdateTagQuery {
    fn from(params: &Params) -> Self {
        Self {
            name: params.get_owned("name"),
            modified_by: params.get_owned("modified_by"),
            state: params.get_owned("state"),
        }
    }
}

/// Parse an integer leniently: anything missing or malformed becomes 0
pub fn parse_int_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// Row offset of a 1-based page; pages below 1 read from the start
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(page_size).max(0)
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

/// Handles tag requests against an injected store.
///
/// Cloned into the router state. Each operation runs in a child span of the
/// span supplied at construction.
#[derive(Clone)]
pub struct TagHandler {
    store: Arc<dyn TagStore>,
    page_size: i64,
    span: Span,
}

impl TagHandler {
    pub fn new(store: Arc<dyn TagStore>, page_size: i64, span: Span) -> Self {
        Self {
            store,
            page_size,
            span,
        }
    }

    /// List one page of tags plus the filtered total
    #[instrument(name = "list_tags", parent = &self.span, skip_all)]
    pub async fn list(&self, query: ListTagsQuery) -> ApiResponse<TagPage> {
        let mut filter = TagFilter {
            name: non_empty(query.name.as_deref()).map(str::to_string),
            state: None,
        };
        if let Some(raw) = non_empty(query.state.as_deref()) {
            match raw.trim().parse::<i32>() {
                Ok(state) => filter.state = Some(state),
                Err(_) => warn!(state = raw, "Ignoring non-numeric state filter"),
            }
        }

        let page = parse_int_or_zero(query.page.as_deref());
        let offset = page_offset(page, self.page_size);

        info!(
            "Listing tags (filter: {:?}, page: {}, offset: {})",
            filter, page, offset
        );

        match self.fetch_page(&filter, offset).await {
            Ok(page) => ApiResponse::success(page),
            Err(e) => {
                error!("Failed to list tags: {}", e);
                ApiResponse::new(ResultCode::Error, TagPage::default())
            }
        }
    }

    async fn fetch_page(&self, filter: &TagFilter, offset: i64) -> StorageResult<TagPage> {
        let list = self.store.get_tags(filter, offset, self.page_size).await?;
        let total = self.store.get_tags_total(filter).await?;
        Ok(TagPage { list, total })
    }

    /// Create a tag from form fields
    #[instrument(name = "create_tag", parent = &self.span, skip_all)]
    pub async fn create(&self, form: CreateTagForm) -> ApiResponse<EmptyData> {
        let name = form.name.unwrap_or_default();
        let created_by = form.created_by.unwrap_or_default();

        let mut valid = Validation::new();
        valid.required_str(&name, "name", "tag name must not be empty");
        valid.max_size(
            &name,
            NAME_MAX_LEN,
            "name",
            "tag name must be at most 20 characters",
        );
        valid.required_str(&created_by, "created_by", "creator must not be empty");
        valid.max_size(
            &created_by,
            CREATED_BY_MAX_LEN,
            "created_by",
            "creator must be at most 15 characters",
        );
        let state = validate_state(&mut valid, form.state.as_deref());

        if valid.has_errors() {
            valid.log_errors();
            return ApiResponse::empty(ResultCode::InvalidParams);
        }

        info!("Creating tag: {}", name);

        match self.store.exist_tag_by_name(&name).await {
            Ok(true) => return ApiResponse::empty(ResultCode::ErrorExistTag),
            Ok(false) => {}
            Err(e) => return storage_failure(e),
        }

        let input = NewTag {
            name,
            created_by,
            state,
        };

        match self.store.create_tag(input).await {
            Ok(tag) => {
                info!(tag_id = tag.id, "Tag created");
                ApiResponse::empty(ResultCode::Success)
            }
            Err(e) => storage_failure(e),
        }
    }

    /// Apply a partial update to the tag at `raw_id`
    #[instrument(name = "update_tag", parent = &self.span, skip_all, fields(id = raw_id))]
    pub async fn update(&self, raw_id: &str, query: UpdateTagQuery) -> ApiResponse<EmptyData> {
        let id = parse_int_or_zero(Some(raw_id));
        let name = non_empty(query.name.as_deref());
        let modified_by = query.modified_by.as_deref().unwrap_or_default();

        let mut valid = Validation::new();
        valid.required_int(id, "id", "tag id must not be empty");
        valid.min(id, 1, "id", "tag id must be greater than 0");
        if let Some(name) = name {
            valid.max_size(
                name,
                NAME_MAX_LEN,
                "name",
                "tag name must be at most 20 characters",
            );
        }
        valid.required_str(modified_by, "modified_by", "modifier must not be empty");
        valid.max_size(
            modified_by,
            MODIFIED_BY_MAX_LEN,
            "modified_by",
            "modifier must be at most 15 characters",
        );
        let state = validate_state(&mut valid, query.state.as_deref());

        if valid.has_errors() {
            valid.log_errors();
            return ApiResponse::empty(ResultCode::Error);
        }

        info!("Updating tag: {}", id);

        match self.store.exist_tag_by_id(id).await {
            Ok(true) => {}
            Ok(false) => return ApiResponse::empty(ResultCode::ErrorNotExistTag),
            Err(e) => return storage_failure(e),
        }

        let update = TagUpdate {
            name: name.map(str::to_string),
            modified_by: non_empty(Some(modified_by)).map(str::to_string),
            state,
        };

        match self.store.update_tag(id, update).await {
            Ok(()) => ApiResponse::empty(ResultCode::Success),
            Err(e) => storage_failure(e),
        }
    }

    /// Hard-delete the tag at `raw_id`
    #[instrument(name = "delete_tag", parent = &self.span, skip_all, fields(id = raw_id))]
    pub async fn delete(&self, raw_id: &str) -> ApiResponse<EmptyData> {
        let id = parse_int_or_zero(Some(raw_id));

        // Only presence is checked here; negative ids fall through to the existence lookup
        let mut valid = Validation::new();
        valid.required_int(id, "id", "tag id must not be empty");

        if valid.has_errors() {
            valid.log_errors();
            return ApiResponse::empty(ResultCode::InvalidParams);
        }

        info!("Deleting tag: {}", id);

        match self.store.exist_tag_by_id(id).await {
            Ok(true) => {}
            Ok(false) => return ApiResponse::empty(ResultCode::ErrorNotExistTag),
            Err(e) => return storage_failure(e),
        }

        match self.store.delete_tag(id).await {
            Ok(()) => ApiResponse::empty(ResultCode::Success),
            Err(e) => storage_failure(e),
        }
    }
}

/// Optional `state` field: must be an integer in 0..=1 when supplied
fn validate_state(valid: &mut Validation, raw: Option<&str>) -> Option<i32> {
    let raw = non_empty(raw)?;
    let state = valid.numeric(raw, "state", "state must be an integer")?;
    if valid.range(
        state,
        STATE_DISABLED.into(),
        STATE_ENABLED.into(),
        "state",
        "state must be 0 or 1",
    ) {
        i32::try_from(state).ok()
    } else {
        None
    }
}

fn storage_failure(err: StorageError) -> ApiResponse<EmptyData> {
    let code = ResultCode::from_storage_error(&err);
    match code {
        ResultCode::Error => error!("Storage operation failed: {}", err),
        _ => info!("Storage rejected the write: {}", err),
    }
    ApiResponse::empty(code)
}

/// List tags
pub async fn list_tags(
    State(handler): State<TagHandler>,
    QueryParams(params): QueryParams,
) -> impl IntoResponse {
    handler.list(ListTagsQuery::from(&params)).await
}

/// Create a new tag
pub async fn create_tag(
    State(handler): State<TagHandler>,
    FormParams(params): FormParams,
) -> impl IntoResponse {
    handler.create(CreateTagForm::from(&params)).await
}

/// Update a tag
pub async fn update_tag(
    State(handler): State<TagHandler>,
    Path(id): Path<String>,
    QueryParams(params): QueryParams,
) -> impl IntoResponse {
    handler.update(&id, UpdateTagQuery::from(&params)).await
}

/// Delete a tag
pub async fn delete_tag(
    State(handler): State<TagHandler>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    handler.delete(&id).await
}
