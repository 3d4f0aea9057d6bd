//! Authentication Handlers
//!
//! Handles login, logout, and current-user lookup

use std::time::Duration;

use axum::{Extension, Json, extract::State};

use crate::auth::{CurrentUser, credentials};
use crate::core::ServerState;
use crate::db::repository::user;
use crate::security_log;
use crate::utils::AppError;
use shared::client::{LoginRequest, LoginResponse, UserInfo};
use shared::error::ApiResponse;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates user credentials and returns a JWT token carrying the
/// resolved principal. Unknown email and wrong password produce the same
/// response - no user enumeration.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let result = credentials::authenticate(&state.pool, &req.email, &req.password)
        .await
        .map_err(AppError::from)?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let auth = match result {
        Some(auth) => auth,
        None => {
            security_log!(
                "WARN",
                "login_failed",
                email = req.email.clone(),
                reason = "invalid_credentials"
            );
            tracing::warn!(email = %req.email, "Login failed - invalid credentials");
            return Err(AppError::invalid("Invalid email or password".to_string()));
        }
    };

    if !auth.user.is_active {
        return Err(AppError::forbidden("Account has been disabled".to_string()));
    }
    if !auth.role.is_active {
        return Err(AppError::forbidden("Role has been disabled".to_string()));
    }

    let token = state
        .jwt_service()
        .generate_token(
            auth.user.id,
            &auth.user.email,
            &auth.user.username,
            &auth.user.display_name,
            auth.role.id,
            &auth.role.name,
            &auth.permissions,
        )
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    security_log!(
        "INFO",
        "login_success",
        user_id = auth.user.id,
        username = auth.user.username.clone()
    );
    tracing::info!(
        user_id = %auth.user.id,
        username = %auth.user.username,
        role = %auth.role.name,
        "User logged in successfully"
    );

    let response = LoginResponse {
        token,
        user: UserInfo {
            id: auth.user.id,
            email: auth.user.email,
            username: auth.user.username,
            display_name: auth.user.display_name,
            role_id: auth.role.id,
            role_name: auth.role.name,
            department_id: auth.user.department_id,
            permissions: auth.permissions,
            is_active: auth.user.is_active,
        },
    };

    Ok(Json(response))
}

/// Get current user info
///
/// `is_active` and the department link are re-read from the database so a
/// deactivation takes effect before the token expires.
pub async fn me(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<UserInfo>, AppError> {
    let fresh = user::find_by_id(&state.pool, user.id)
        .await
        .map_err(AppError::from)?;

    let (department_id, is_active) = match fresh {
        Some(u) => (u.department_id, u.is_active),
        None => (None, false),
    };

    let user_info = UserInfo {
        id: user.id,
        email: user.email,
        username: user.username,
        display_name: user.display_name,
        role_id: user.role_id,
        role_name: user.role_name,
        department_id,
        permissions: user.permissions,
        is_active,
    };

    Ok(Json(user_info))
}

/// Logout handler
///
/// Tokens are stateless; logout is recorded for the security log and the
/// client discards its token.
pub async fn logout(
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    security_log!(
        "INFO",
        "logout",
        user_id = user.id,
        username = user.username.clone()
    );
    tracing::info!(user_id = %user.id, username = %user.username, "User logged out");

    Ok(Json(ApiResponse::ok()))
}
