//! Permission Catalog API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::permission;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{Permission, PermissionCreate};

/// List the permission catalog
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Permission>>> {
    let permissions = permission::find_all(&state.pool)
        .await
        .map_err(AppError::from)?;
    Ok(Json(permissions))
}

/// Add a permission to the catalog
///
/// The gate denies unknown codes by default, so a new code grants nothing
/// until a role is linked to it.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PermissionCreate>,
) -> AppResult<Json<Permission>> {
    validate_required_text(&payload.code, "code", MAX_NAME_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    // Enforce the `<area>:<action>` convention
    if !payload.code.contains(':') {
        return Err(AppError::validation(format!(
            "Permission code '{}' must follow the '<area>:<action>' convention",
            payload.code
        )));
    }

    let permission = permission::create(&state.pool, payload)
        .await
        .map_err(AppError::from)?;
    Ok(Json(permission))
}
