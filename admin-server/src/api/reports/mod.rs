//! Reports and Dashboard API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::permissions::{MANAGE_DASHBOARDS, MANAGE_REPORTS};
use crate::auth::require_permission;
use crate::core::ServerState;

/// Reports router - `manage:reports` for reports, `manage:dashboards`
/// for the dashboard summary
pub fn router() -> Router<ServerState> {
    let reports = Router::new()
        .route("/api/reports/summary", get(handler::reports_summary))
        .layer(middleware::from_fn(require_permission(MANAGE_REPORTS)));

    let dashboard = Router::new()
        .route("/api/dashboard", get(handler::dashboard))
        .layer(middleware::from_fn(require_permission(MANAGE_DASHBOARDS)));

    reports.merge(dashboard)
}
