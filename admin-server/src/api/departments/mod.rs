//! Department API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::permissions::MANAGE_DEPARTMENTS;
use crate::auth::require_permission;
use crate::core::ServerState;

/// Department router - requires `manage:departments`
pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/departments", routes())
        .layer(middleware::from_fn(require_permission(MANAGE_DEPARTMENTS)))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
