//! User API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::permissions::MANAGE_USERS;
use crate::auth::require_permission;
use crate::core::ServerState;

/// User router - every route requires `manage:users`
pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/users", routes())
        .layer(middleware::from_fn(require_permission(MANAGE_USERS)))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/all", get(handler::list_with_inactive))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::deactivate),
        )
}
