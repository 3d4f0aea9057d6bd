//! User API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_USERNAME_LEN, validate_email, validate_optional_text, validate_password,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::error::ApiResponse;
use shared::models::{UserCreate, UserResponse, UserUpdate};

/// List active users
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = user::find_all(&state.pool).await.map_err(AppError::from)?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// List all users including deactivated
pub async fn list_with_inactive(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = user::find_all_with_inactive(&state.pool)
        .await
        .map_err(AppError::from)?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UserResponse>> {
    let user = user::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
    Ok(Json(user.into()))
}

/// Create a new user
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<UserResponse>> {
    validate_email(&payload.email)?;
    validate_required_text(&payload.username, "username", MAX_USERNAME_LEN)?;
    validate_password(&payload.password)?;
    validate_optional_text(&payload.display_name, "display_name", MAX_NAME_LEN)?;

    let user = user::create(&state.pool, payload)
        .await
        .map_err(AppError::from)?;
    Ok(Json(user.into()))
}

/// Update a user
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<UserResponse>> {
    if let Some(ref email) = payload.email {
        validate_email(email)?;
    }
    if let Some(ref password) = payload.password {
        validate_password(password)?;
    }
    validate_optional_text(&payload.username, "username", MAX_USERNAME_LEN)?;
    validate_optional_text(&payload.display_name, "display_name", MAX_NAME_LEN)?;

    let user = user::update(&state.pool, id, payload)
        .await
        .map_err(AppError::from)?;
    Ok(Json(user.into()))
}

/// Deactivate a user (soft delete - users are never hard-deleted)
pub async fn deactivate(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    if current.id == id {
        return Err(AppError::validation(
            "Cannot deactivate own account".to_string(),
        ));
    }

    user::deactivate(&state.pool, id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(ApiResponse::ok()))
}
