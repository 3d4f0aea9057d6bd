//! Department API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::department;
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::error::ApiResponse;
use shared::models::{Department, DepartmentCreate, DepartmentUpdate};

/// List all departments
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Department>>> {
    let departments = department::find_all(&state.pool)
        .await
        .map_err(AppError::from)?;
    Ok(Json(departments))
}

/// Get department by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Department>> {
    let department = department::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))?;
    Ok(Json(department))
}

/// Create a new department
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<Json<Department>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let department = department::create(&state.pool, payload)
        .await
        .map_err(AppError::from)?;
    Ok(Json(department))
}

/// Update a department
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DepartmentUpdate>,
) -> AppResult<Json<Department>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;

    let department = department::update(&state.pool, id, payload)
        .await
        .map_err(AppError::from)?;
    Ok(Json(department))
}

/// Delete a department (blocked while users reference it)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    department::delete(&state.pool, id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(ApiResponse::ok()))
}
