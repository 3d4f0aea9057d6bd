//! Reports and Dashboard Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct ReportsSummary {
    pub total_employees: i64,
    pub active_employees: i64,
    pub departments: i64,
}

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub active_employees: i64,
    pub active_users: i64,
    pub departments: i64,
    pub roles: i64,
}

async fn count(state: &ServerState, sql: &str) -> AppResult<i64> {
    sqlx::query_scalar(sql)
        .fetch_one(&state.pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))
}

/// Headcount summary for the reports page
pub async fn reports_summary(State(state): State<ServerState>) -> AppResult<Json<ReportsSummary>> {
    let summary = ReportsSummary {
        total_employees: count(&state, "SELECT COUNT(*) FROM employee").await?,
        active_employees: count(&state, "SELECT COUNT(*) FROM employee WHERE is_active = 1")
            .await?,
        departments: count(&state, "SELECT COUNT(*) FROM department").await?,
    };
    Ok(Json(summary))
}

/// Quick stats for the dashboard page
pub async fn dashboard(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    let stats = DashboardStats {
        active_employees: count(&state, "SELECT COUNT(*) FROM employee WHERE is_active = 1")
            .await?,
        active_users: count(&state, "SELECT COUNT(*) FROM user WHERE is_active = 1").await?,
        departments: count(&state, "SELECT COUNT(*) FROM department").await?,
        roles: count(&state, "SELECT COUNT(*) FROM role WHERE is_active = 1").await?,
    };
    Ok(Json(stats))
}
