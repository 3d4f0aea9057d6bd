//! Reference Data API Module
//!
//! One router serves all reference kinds; the `{kind}` path segment must
//! parse into the closed [`shared::models::ReferenceKind`] enum.

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::permissions::MANAGE_REFERENCES;
use crate::auth::require_permission;
use crate::core::ServerState;

/// Reference data router - requires `manage:references`
pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/references", routes())
        .layer(middleware::from_fn(require_permission(MANAGE_REFERENCES)))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{kind}", get(handler::list).post(handler::create))
        .route(
            "/{kind}/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
