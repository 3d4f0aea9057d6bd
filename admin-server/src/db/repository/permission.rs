//! Permission Repository
//!
//! Holds the permission catalog and the role_permission join table.
//! [`resolve_effective_permissions`] is the single read path the
//! authorization layer uses; it re-queries on every call and leaves any
//! caching to the caller (the login path resolves once per session).

use std::collections::HashSet;

use super::{RepoError, RepoResult};
use shared::models::{Permission, PermissionCreate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Permission>> {
    let permissions = sqlx::query_as::<_, Permission>(
        "SELECT id, code, name, description FROM permission ORDER BY code",
    )
    .fetch_all(pool)
    .await?;
    Ok(permissions)
}

pub async fn find_by_code(pool: &SqlitePool, code: &str) -> RepoResult<Option<Permission>> {
    let permission = sqlx::query_as::<_, Permission>(
        "SELECT id, code, name, description FROM permission WHERE code = ? LIMIT 1",
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;
    Ok(permission)
}

pub async fn create(pool: &SqlitePool, data: PermissionCreate) -> RepoResult<Permission> {
    if find_by_code(pool, &data.code).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Permission '{}' already exists",
            data.code
        )));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO permission (code, name, description) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.code)
    .bind(&data.name)
    .bind(&data.description)
    .fetch_one(pool)
    .await?;

    let created = sqlx::query_as::<_, Permission>(
        "SELECT id, code, name, description FROM permission WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    created.ok_or_else(|| RepoError::Database("Failed to create permission".into()))
}

/// Resolve the flattened permission set granted to a role.
///
/// Follows role -> role_permission -> permission and returns the
/// deduplicated codes. An unknown or link-less role yields the empty set.
pub async fn resolve_effective_permissions(
    pool: &SqlitePool,
    role_id: i64,
) -> RepoResult<HashSet<String>> {
    let codes: Vec<String> = sqlx::query_scalar(
        "SELECT p.code FROM permission p \
         JOIN role_permission rp ON rp.permission_id = p.id \
         WHERE rp.role_id = ?",
    )
    .bind(role_id)
    .fetch_all(pool)
    .await?;
    Ok(codes.into_iter().collect())
}

/// Permission codes for a role as a sorted list (API responses).
pub async fn find_codes_for_role(pool: &SqlitePool, role_id: i64) -> RepoResult<Vec<String>> {
    let mut codes: Vec<String> = resolve_effective_permissions(pool, role_id)
        .await?
        .into_iter()
        .collect();
    codes.sort();
    Ok(codes)
}

/// Replace a single role's permission links with the given codes.
///
/// Runs atomically: the old links are only gone once the new ones are
/// committed. Unknown codes fail the whole call.
pub async fn set_role_permissions(
    pool: &SqlitePool,
    role_id: i64,
    codes: &[String],
) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    // Resolve all codes first so an unknown one aborts before any write
    let mut permission_ids = Vec::with_capacity(codes.len());
    for code in codes {
        let id: Option<i64> = sqlx::query_scalar("SELECT id FROM permission WHERE code = ?")
            .bind(code)
            .fetch_optional(&mut *tx)
            .await?;
        match id {
            Some(id) => permission_ids.push(id),
            None => {
                return Err(RepoError::Validation(format!(
                    "Unknown permission code '{code}'"
                )));
            }
        }
    }

    sqlx::query("DELETE FROM role_permission WHERE role_id = ?")
        .bind(role_id)
        .execute(&mut *tx)
        .await?;

    for permission_id in permission_ids {
        sqlx::query(
            "INSERT OR IGNORE INTO role_permission (role_id, permission_id) VALUES (?, ?)",
        )
        .bind(role_id)
        .bind(permission_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}
