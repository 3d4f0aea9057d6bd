//! Permission Catalog API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::permissions::MANAGE_PERMISSIONS;
use crate::auth::require_permission;
use crate::core::ServerState;

/// Permission router - requires `manage:permissions`
pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/permissions", routes())
        .layer(middleware::from_fn(require_permission(MANAGE_PERMISSIONS)))
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list).post(handler::create))
}
