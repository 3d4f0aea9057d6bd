//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::error::ApiResponse;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

/// List active employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(&state.pool)
        .await
        .map_err(AppError::from)?;
    Ok(Json(employees))
}

/// List all employees including deactivated
pub async fn list_with_inactive(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all_with_inactive(&state.pool)
        .await
        .map_err(AppError::from)?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = employee::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(Json(employee))
}

#[derive(Serialize)]
pub struct NextNumberResponse {
    pub employee_no: String,
}

/// Preview the next employee number without allocating it
pub async fn next_number(
    State(state): State<ServerState>,
) -> AppResult<Json<NextNumberResponse>> {
    let employee_no = employee::next_employee_no(&state.pool)
        .await
        .map_err(AppError::from)?;
    Ok(Json(NextNumberResponse { employee_no }))
}

/// Create a new employee; the employee number is assigned server-side
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    validate_required_text(&payload.first_name, "first_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.last_name, "last_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.second_name, "second_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.third_name, "third_name", MAX_NAME_LEN)?;

    let employee = employee::create(&state.pool, payload)
        .await
        .map_err(AppError::from)?;
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    validate_optional_text(&payload.first_name, "first_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.last_name, "last_name", MAX_NAME_LEN)?;

    let employee = employee::update(&state.pool, id, payload)
        .await
        .map_err(AppError::from)?;
    Ok(Json(employee))
}

/// Deactivate an employee (soft delete)
pub async fn deactivate(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    employee::deactivate(&state.pool, id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(ApiResponse::ok()))
}
