//! Reference Data API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::reference;
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::error::ApiResponse;
use shared::models::{ReferenceItem, ReferenceItemCreate, ReferenceItemUpdate, ReferenceKind};

fn parse_kind(kind: &str) -> Result<ReferenceKind, AppError> {
    kind.parse::<ReferenceKind>()
        .map_err(|e| AppError::validation(e.to_string()))
}

/// List items of a reference kind
pub async fn list(
    State(state): State<ServerState>,
    Path(kind): Path<String>,
) -> AppResult<Json<Vec<ReferenceItem>>> {
    let kind = parse_kind(&kind)?;
    let items = reference::find_all(&state.pool, kind)
        .await
        .map_err(AppError::from)?;
    Ok(Json(items))
}

/// Get a reference item by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path((kind, id)): Path<(String, i64)>,
) -> AppResult<Json<ReferenceItem>> {
    let kind = parse_kind(&kind)?;
    let item = reference::find_by_id(&state.pool, kind, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("{kind} {id} not found")))?;
    Ok(Json(item))
}

/// Create a reference item
pub async fn create(
    State(state): State<ServerState>,
    Path(kind): Path<String>,
    Json(payload): Json<ReferenceItemCreate>,
) -> AppResult<Json<ReferenceItem>> {
    let kind = parse_kind(&kind)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let item = reference::create(&state.pool, kind, payload)
        .await
        .map_err(AppError::from)?;
    Ok(Json(item))
}

/// Update a reference item
pub async fn update(
    State(state): State<ServerState>,
    Path((kind, id)): Path<(String, i64)>,
    Json(payload): Json<ReferenceItemUpdate>,
) -> AppResult<Json<ReferenceItem>> {
    let kind = parse_kind(&kind)?;
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;

    let item = reference::update(&state.pool, kind, id, payload)
        .await
        .map_err(AppError::from)?;
    Ok(Json(item))
}

/// Delete a reference item (blocked while employees reference it)
pub async fn delete(
    State(state): State<ServerState>,
    Path((kind, id)): Path<(String, i64)>,
) -> AppResult<Json<ApiResponse<()>>> {
    let kind = parse_kind(&kind)?;
    reference::delete(&state.pool, kind, id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(ApiResponse::ok()))
}
