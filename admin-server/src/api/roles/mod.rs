//! Role API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::permissions::MANAGE_ROLES;
use crate::auth::require_permission;
use crate::core::ServerState;

/// Role router - every route requires `manage:roles`
pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/roles", routes())
        .layer(middleware::from_fn(require_permission(MANAGE_ROLES)))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/all", get(handler::list_with_inactive))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route(
            "/{id}/permissions",
            get(handler::get_role_permissions).put(handler::update_role_permissions),
        )
}
