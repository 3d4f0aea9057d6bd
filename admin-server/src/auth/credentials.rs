//! Credential Verifier
//!
//! Looks up a user by email, verifies the password against the stored
//! argon2 hash, and resolves the effective permission set. "No such user"
//! and "wrong password" are both `Ok(None)` - the caller cannot tell them
//! apart, which keeps the login response uniform.

use sqlx::SqlitePool;

use crate::auth::password;
use crate::db::repository::{RepoError, RepoResult, permission, role, user};
use shared::models::{Role, User};

/// Resolved principal bundle returned on successful authentication
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub role: Role,
    /// Effective permission codes, sorted for stable responses
    pub permissions: Vec<String>,
}

/// Verify credentials and resolve the principal.
///
/// Returns `Ok(None)` when the email is unknown, the user has no stored
/// hash, or the password does not match. Store errors propagate as `Err`;
/// they are never folded into the uniform failure.
pub async fn authenticate(
    pool: &SqlitePool,
    email: &str,
    secret: &str,
) -> RepoResult<Option<AuthenticatedUser>> {
    let Some(user) = user::find_by_email(pool, email).await? else {
        return Ok(None);
    };

    if user.hash_pass.is_empty() {
        return Ok(None);
    }

    let password_valid = password::verify(secret, &user.hash_pass)
        .map_err(|e| RepoError::Database(format!("Password verification failed: {e}")))?;
    if !password_valid {
        return Ok(None);
    }

    let role = role::find_by_id(pool, user.role_id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Role {} missing for user", user.role_id)))?;

    let mut permissions: Vec<String> =
        permission::resolve_effective_permissions(pool, user.role_id)
            .await?
            .into_iter()
            .collect();
    permissions.sort();

    Ok(Some(AuthenticatedUser {
        user,
        role,
        permissions,
    }))
}
