// ABOUTME: HTTP API layer for Tagboard providing REST endpoints and routing
// ABOUTME: Integration layer that wires the tag handlers onto axum routers

use axum::{
    routing::{get, put},
    Router,
};

pub mod health;
pub mod params;
pub mod response;
pub mod tags_handlers;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use response::{ApiResponse, EmptyData, ResultCode};
pub use tags_handlers::TagHandler;

/// Mount point of the tags resource
pub const TAGS_PATH: &str = "/api/v1/tags";

/// Creates the tags API router (nested under /api/v1/tags)
pub fn create_tags_router() -> Router<TagHandler> {
    Router::new()
        .route(
            "/",
            get(tags_handlers::list_tags).post(tags_handlers::create_tag),
        )
        .route(
            "/{id}",
            put(tags_handlers::update_tag).delete(tags_handlers::delete_tag),
        )
}

/// Creates the full application router
pub fn create_app(handler: TagHandler) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .nest(TAGS_PATH, create_tags_router())
        .with_state(handler)
}
