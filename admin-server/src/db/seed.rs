//! Seed Provisioning
//!
//! Idempotent bootstrap of roles, departments, users, and the permission
//! catalog, keyed on natural keys (role.name, permission.code,
//! department.name, user.email) so repeated runs converge on the same state.
//!
//! The role_permission mapping is NOT diffed: every run deletes all links
//! and recreates them from the static table in
//! [`crate::auth::permissions::ROLE_PERMISSIONS`]. Grants added by hand do
//! not survive a re-seed. The clear+recreate runs inside a single
//! transaction, so concurrent authorization reads never observe the
//! momentarily-empty mapping.

use sqlx::SqlitePool;

use super::repository::{RepoError, RepoResult};
use crate::auth::password;
use crate::auth::permissions::{CATALOG, ROLE_PERMISSIONS};

/// Bootstrap credentials for the seeded accounts
#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub admin_email: String,
    pub admin_password: String,
    pub hr_email: String,
    pub hr_password: String,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            admin_email: "admin@example.com".to_string(),
            admin_password: "adminpassword".to_string(),
            hr_email: "hr@example.com".to_string(),
            hr_password: "adminpassword".to_string(),
        }
    }
}

/// Seeded roles: (name, description, is_system)
const ROLES: &[(&str, &str, bool)] = &[
    ("ADMIN", "Full system access", true),
    (
        "EMPLOYEE",
        "Basic access to report incidents and view own reports",
        false,
    ),
];

/// Seeded departments
const DEPARTMENTS: &[&str] = &["Information Technology", "Human Resources"];

/// Run the full seed. Safe to call on every startup.
pub async fn run(pool: &SqlitePool, opts: &SeedOptions) -> RepoResult<()> {
    upsert_roles(pool).await?;
    upsert_departments(pool).await?;
    upsert_permissions(pool).await?;
    upsert_users(pool, opts).await?;
    replace_role_permissions(pool).await?;

    tracing::info!("Seed provisioning completed");
    Ok(())
}

async fn upsert_roles(pool: &SqlitePool) -> RepoResult<()> {
    for &(name, description, is_system) in ROLES {
        sqlx::query(
            "INSERT INTO role (name, description, is_system, is_active) VALUES (?, ?, ?, 1) \
             ON CONFLICT(name) DO UPDATE SET description = excluded.description",
        )
        .bind(name)
        .bind(description)
        .bind(is_system)
        .execute(pool)
        .await?;
    }
    Ok(())
}

async fn upsert_departments(pool: &SqlitePool) -> RepoResult<()> {
    for &name in DEPARTMENTS {
        sqlx::query("INSERT INTO department (name) VALUES (?) ON CONFLICT(name) DO NOTHING")
            .bind(name)
            .execute(pool)
            .await?;
    }
    Ok(())
}

async fn upsert_permissions(pool: &SqlitePool) -> RepoResult<()> {
    for &(code, name, description) in CATALOG {
        sqlx::query(
            "INSERT INTO permission (code, name, description) VALUES (?, ?, ?) \
             ON CONFLICT(code) DO UPDATE SET name = excluded.name, description = excluded.description",
        )
        .bind(code)
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;
    }
    Ok(())
}

async fn upsert_users(pool: &SqlitePool, opts: &SeedOptions) -> RepoResult<()> {
    let admin_role_id = role_id_by_name(pool, "ADMIN").await?;
    let employee_role_id = role_id_by_name(pool, "EMPLOYEE").await?;
    let hr_department_id: Option<i64> =
        sqlx::query_scalar("SELECT id FROM department WHERE name = ?")
            .bind("Human Resources")
            .fetch_optional(pool)
            .await?;

    let admin_hash = password::hash(&opts.admin_password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;
    upsert_user(
        pool,
        &opts.admin_email,
        "admin",
        "Admin User",
        &admin_hash,
        admin_role_id,
        None,
    )
    .await?;

    let hr_hash = password::hash(&opts.hr_password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;
    upsert_user(
        pool,
        &opts.hr_email,
        "hr",
        "HR User",
        &hr_hash,
        employee_role_id,
        hr_department_id,
    )
    .await?;

    Ok(())
}

async fn upsert_user(
    pool: &SqlitePool,
    email: &str,
    username: &str,
    display_name: &str,
    hash_pass: &str,
    role_id: i64,
    department_id: Option<i64>,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO user (email, username, hash_pass, display_name, department_id, role_id, is_active, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, 1, ?) \
         ON CONFLICT(email) DO UPDATE SET \
            username = excluded.username, \
            hash_pass = excluded.hash_pass, \
            display_name = excluded.display_name, \
            department_id = excluded.department_id, \
            role_id = excluded.role_id",
    )
    .bind(email)
    .bind(username)
    .bind(hash_pass)
    .bind(display_name)
    .bind(department_id)
    .bind(role_id)
    .bind(chrono::Utc::now())
    .execute(pool)
    .await?;
    Ok(())
}

async fn role_id_by_name(pool: &SqlitePool, name: &str) -> RepoResult<i64> {
    let id: Option<i64> = sqlx::query_scalar("SELECT id FROM role WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;
    id.ok_or_else(|| RepoError::Database(format!("Seed role '{name}' missing")))
}

/// Destructive replace: drop ALL role_permission links, then recreate the
/// static mapping. Atomic - a concurrent permission resolution sees either
/// the old links or the new ones, never an empty table.
async fn replace_role_permissions(pool: &SqlitePool) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM role_permission")
        .execute(&mut *tx)
        .await?;

    for &(role_name, codes) in ROLE_PERMISSIONS {
        let role_id: Option<i64> = sqlx::query_scalar("SELECT id FROM role WHERE name = ?")
            .bind(role_name)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(role_id) = role_id else {
            tracing::warn!(role = role_name, "Role not found, skipping permission assignment");
            continue;
        };

        for &code in codes {
            let permission_id: Option<i64> =
                sqlx::query_scalar("SELECT id FROM permission WHERE code = ?")
                    .bind(code)
                    .fetch_optional(&mut *tx)
                    .await?;
            let Some(permission_id) = permission_id else {
                tracing::warn!(code, "Permission not found, skipping");
                continue;
            };

            sqlx::query("INSERT INTO role_permission (role_id, permission_id) VALUES (?, ?)")
                .bind(role_id)
                .bind(permission_id)
                .execute(&mut *tx)
                .await?;
        }
    }

    tx.commit().await?;
    Ok(())
}
