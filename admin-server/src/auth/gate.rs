//! Authorization Gate
//!
//! Pure, stateless allow/deny decisions over an already-resolved principal.
//! The gate never touches the database: permission resolution happened at
//! login time and travels with the [`CurrentUser`].
//!
//! 判定规则：
//! 1. 无 principal（未登录）一律拒绝
//! 2. 哨兵权限 `admin:all` 先于具体检查评估，持有者放行一切
//! 3. 其余情况取交集：要求列表命中任意一项即放行（OR 语义）
//! 4. 未知权限码不匹配任何授权，默认拒绝

use thiserror::Error;

use crate::auth::CurrentUser;
use crate::auth::permissions::ADMIN_ALL;

/// Denial reasons from the enforcing gate variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthzError {
    /// No authenticated principal (maps to 401 / login redirect)
    #[error("authentication required")]
    Unauthenticated,
    /// Principal lacks every required permission (maps to 403)
    #[error("permission denied")]
    Forbidden,
}

/// Core check: does `granted` satisfy at least one of `required`?
///
/// The sentinel is evaluated before the specific check: one `admin:all`
/// grant is a full bypass, not an additive permission.
pub(crate) fn permits(granted: &[String], required: &[&str]) -> bool {
    if granted.iter().any(|p| p == ADMIN_ALL) {
        return true;
    }
    required.iter().any(|r| granted.iter().any(|p| p == r))
}

/// Boolean gate: allow/deny with no side effects.
///
/// `required` is already normalized to a list; a caller passing several
/// codes is asking "does the user have at least one of these".
pub fn authorize(principal: Option<&CurrentUser>, required: &[&str]) -> bool {
    match principal {
        Some(user) => permits(&user.permissions, required),
        None => false,
    }
}

/// Enforcing gate: signals why a check failed.
pub fn require(principal: Option<&CurrentUser>, required: &[&str]) -> Result<(), AuthzError> {
    let user = principal.ok_or(AuthzError::Unauthenticated)?;
    if permits(&user.permissions, required) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(permissions: &[&str]) -> CurrentUser {
        CurrentUser {
            id: 1,
            email: "hr@example.com".to_string(),
            username: "hr".to_string(),
            display_name: "HR User".to_string(),
            role_id: 2,
            role_name: "EMPLOYEE".to_string(),
            permissions: permissions.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn missing_principal_is_denied() {
        assert!(!authorize(None, &["manage:reports"]));
        assert_eq!(
            require(None, &["manage:reports"]),
            Err(AuthzError::Unauthenticated)
        );
    }

    #[test]
    fn empty_grant_set_denies_every_requirement() {
        let user = principal(&[]);
        assert!(!authorize(Some(&user), &["manage:reports"]));
        assert!(!authorize(Some(&user), &["manage:users", "manage:roles"]));
        assert_eq!(
            require(Some(&user), &["manage:reports"]),
            Err(AuthzError::Forbidden)
        );
    }

    #[test]
    fn sentinel_satisfies_anything() {
        let admin = principal(&["admin:all"]);
        assert!(authorize(Some(&admin), &["manage:users"]));
        // Codes that exist in no catalog still pass for the sentinel holder
        assert!(authorize(Some(&admin), &["no:such_permission"]));
        assert!(require(Some(&admin), &["no:such_permission"]).is_ok());
    }

    #[test]
    fn requirement_list_uses_or_semantics() {
        let user = principal(&["manage:employees", "manage:reports"]);
        assert!(authorize(Some(&user), &["manage:reports"]));
        assert!(!authorize(Some(&user), &["manage:users"]));
        // One hit out of two is enough; both are never required
        assert!(authorize(Some(&user), &["manage:users", "manage:reports"]));
    }

    #[test]
    fn unknown_codes_never_match() {
        let user = principal(&["manage:reports"]);
        assert!(!authorize(Some(&user), &["unit:create"]));
        assert_eq!(
            require(Some(&user), &["unit:create"]),
            Err(AuthzError::Forbidden)
        );
    }
}
