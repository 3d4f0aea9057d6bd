//! Client-facing DTOs shared between server and API consumers

use serde::{Deserialize, Serialize};

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response with token and resolved user info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Authenticated user info returned to clients
///
/// `permissions` is the effective permission set resolved from the user's
/// role at login time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub role_id: i64,
    pub role_name: String,
    pub department_id: Option<i64>,
    pub permissions: Vec<String>,
    pub is_active: bool,
}
