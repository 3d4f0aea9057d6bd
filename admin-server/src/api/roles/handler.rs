//! Role API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::{permission, role};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::error::ApiResponse;
use shared::models::{Role, RoleCreate, RolePermissions, RoleUpdate};

/// List active roles
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Role>>> {
    let roles = role::find_all(&state.pool).await.map_err(AppError::from)?;
    Ok(Json(roles))
}

/// List all roles including inactive
pub async fn list_with_inactive(State(state): State<ServerState>) -> AppResult<Json<Vec<Role>>> {
    let roles = role::find_all_with_inactive(&state.pool)
        .await
        .map_err(AppError::from)?;
    Ok(Json(roles))
}

/// Get role by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Role>> {
    let role = role::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Role {id} not found")))?;
    Ok(Json(role))
}

/// Create a new role
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoleCreate>,
) -> AppResult<Json<Role>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let role = role::create(&state.pool, payload)
        .await
        .map_err(AppError::from)?;
    Ok(Json(role))
}

/// Update a role
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RoleUpdate>,
) -> AppResult<Json<Role>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let role = role::update(&state.pool, id, payload)
        .await
        .map_err(AppError::from)?;
    Ok(Json(role))
}

/// Delete a role (blocked for system roles and roles in use)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    role::delete(&state.pool, id).await.map_err(AppError::from)?;
    Ok(Json(ApiResponse::ok()))
}

/// Get a role's permission codes
pub async fn get_role_permissions(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<RolePermissions>> {
    let role = role::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Role {id} not found")))?;

    let permissions = permission::find_codes_for_role(&state.pool, id)
        .await
        .map_err(AppError::from)?;

    Ok(Json(RolePermissions {
        role_id: role.id,
        role_name: role.name,
        permissions,
    }))
}

/// Replace a role's permission codes
///
/// Note: grants set here are replaced wholesale by the next seed run; the
/// seed recreates the static mapping, it does not merge.
pub async fn update_role_permissions(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(codes): Json<Vec<String>>,
) -> AppResult<Json<RolePermissions>> {
    let role = role::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Role {id} not found")))?;

    if role.is_system {
        return Err(AppError::validation(
            "Cannot modify system role permissions".to_string(),
        ));
    }

    permission::set_role_permissions(&state.pool, id, &codes)
        .await
        .map_err(AppError::from)?;

    let permissions = permission::find_codes_for_role(&state.pool, id)
        .await
        .map_err(AppError::from)?;

    Ok(Json(RolePermissions {
        role_id: role.id,
        role_name: role.name,
        permissions,
    }))
}
