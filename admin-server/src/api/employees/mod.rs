//! Employee API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::permissions::MANAGE_EMPLOYEES;
use crate::auth::require_permission;
use crate::core::ServerState;

/// Employee router - requires `manage:employees`
pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/employees", routes())
        .layer(middleware::from_fn(require_permission(MANAGE_EMPLOYEES)))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/all", get(handler::list_with_inactive))
        .route("/next-number", get(handler::next_number))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::deactivate),
        )
}
