//! User Repository

use super::{RepoError, RepoResult, role};
use crate::auth::password;
use shared::models::{User, UserCreate, UserUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, email, username, hash_pass, display_name, department_id, role_id, is_active, created_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {COLUMNS} FROM user WHERE is_active = 1 ORDER BY username"
    ))
    .fetch_all(pool)
    .await?;
    Ok(users)
}

pub async fn find_all_with_inactive(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM user ORDER BY username"))
        .fetch_all(pool)
        .await?;
    Ok(users)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM user WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Exact-match lookup; emails are stored as provisioned.
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {COLUMNS} FROM user WHERE email = ? LIMIT 1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {COLUMNS} FROM user WHERE username = ? LIMIT 1"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn create(pool: &SqlitePool, data: UserCreate) -> RepoResult<User> {
    if find_by_email(pool, &data.email).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Email '{}' already exists",
            data.email
        )));
    }
    if find_by_username(pool, &data.username).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Username '{}' already exists",
            data.username
        )));
    }
    if role::find_by_id(pool, data.role_id).await?.is_none() {
        return Err(RepoError::Validation(format!(
            "Role {} not found",
            data.role_id
        )));
    }

    let hash_pass = password::hash(&data.password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;
    let display_name = data.display_name.unwrap_or_else(|| data.username.clone());

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO user (email, username, hash_pass, display_name, department_id, role_id, is_active, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, 1, ?) RETURNING id",
    )
    .bind(&data.email)
    .bind(&data.username)
    .bind(&hash_pass)
    .bind(&display_name)
    .bind(data.department_id)
    .bind(data.role_id)
    .bind(chrono::Utc::now())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: UserUpdate) -> RepoResult<User> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))?;

    if let Some(ref new_email) = data.email
        && new_email != &existing.email
        && find_by_email(pool, new_email).await?.is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "Email '{new_email}' already exists"
        )));
    }
    if let Some(ref new_username) = data.username
        && new_username != &existing.username
        && find_by_username(pool, new_username).await?.is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "Username '{new_username}' already exists"
        )));
    }
    if let Some(role_id) = data.role_id
        && role::find_by_id(pool, role_id).await?.is_none()
    {
        return Err(RepoError::Validation(format!("Role {role_id} not found")));
    }

    let hash_pass = match data.password {
        Some(ref pw) => Some(
            password::hash(pw)
                .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?,
        ),
        None => None,
    };

    let rows = sqlx::query(
        "UPDATE user SET \
            email = COALESCE(?1, email), \
            username = COALESCE(?2, username), \
            hash_pass = COALESCE(?3, hash_pass), \
            display_name = COALESCE(?4, display_name), \
            department_id = COALESCE(?5, department_id), \
            role_id = COALESCE(?6, role_id), \
            is_active = COALESCE(?7, is_active) \
         WHERE id = ?8",
    )
    .bind(&data.email)
    .bind(&data.username)
    .bind(&hash_pass)
    .bind(&data.display_name)
    .bind(data.department_id)
    .bind(data.role_id)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}

/// Soft-deactivate a user. Users are never hard-deleted.
pub async fn deactivate(pool: &SqlitePool, id: i64) -> RepoResult<User> {
    update(
        pool,
        id,
        UserUpdate {
            email: None,
            username: None,
            password: None,
            display_name: None,
            department_id: None,
            role_id: None,
            is_active: Some(false),
        },
    )
    .await
}
