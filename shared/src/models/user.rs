//! User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account entity
///
/// Every user has exactly one role; email and username are globally unique.
/// The stored password hash is an argon2 PHC string and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub display_name: String,
    /// Optional department reference
    pub department_id: Option<i64>,
    /// Role reference (exactly one)
    pub role_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// User response (without password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub department_id: Option<i64>,
    pub role_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            username: u.username,
            display_name: u.display_name,
            department_id: u.department_id,
            role_id: u.role_id,
            is_active: u.is_active,
            created_at: u.created_at,
        }
    }
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub username: String,
    pub password: String,
    pub display_name: Option<String>,
    pub department_id: Option<i64>,
    pub role_id: i64,
}

/// Update user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub display_name: Option<String>,
    pub department_id: Option<i64>,
    pub role_id: Option<i64>,
    pub is_active: Option<bool>,
}
