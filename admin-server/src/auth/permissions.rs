//! Permission Definitions
//!
//! 权限码说明：
//! - 权限码是稳定标识，授权判定只看 code，不看显示名
//! - `admin:all` 是哨兵权限：持有者通过一切检查
//! - 未知权限码不匹配任何授权（默认拒绝）

/// Sentinel permission - satisfies every requirement
pub const ADMIN_ALL: &str = "admin:all";

/// 管理后台各页面权限 (9 项)
pub const MANAGE_MANAGEMENT: &str = "manage:management";
pub const MANAGE_USERS: &str = "manage:users";
pub const MANAGE_ROLES: &str = "manage:roles";
pub const MANAGE_DEPARTMENTS: &str = "manage:departments";
pub const MANAGE_PERMISSIONS: &str = "manage:permissions";
pub const MANAGE_EMPLOYEES: &str = "manage:employees";
pub const MANAGE_REPORTS: &str = "manage:reports";
pub const MANAGE_DASHBOARDS: &str = "manage:dashboards";
pub const MANAGE_REFERENCES: &str = "manage:references";

/// Full permission catalog seeded into the permission table:
/// (code, display name, description)
pub const CATALOG: &[(&str, &str, &str)] = &[
    (ADMIN_ALL, "Manage All", "Ability to view all pages"),
    (
        MANAGE_MANAGEMENT,
        "Manage System",
        "Ability to view management and users pages",
    ),
    (MANAGE_USERS, "Manage Users", "Ability to view users pages"),
    (MANAGE_ROLES, "Manage Roles", "Ability to view roles pages"),
    (
        MANAGE_DEPARTMENTS,
        "Manage Departments",
        "Ability to view departments pages",
    ),
    (
        MANAGE_PERMISSIONS,
        "Manage Permissions",
        "Ability to view permissions pages",
    ),
    (
        MANAGE_EMPLOYEES,
        "Manage Employees",
        "Ability to view employees pages",
    ),
    (
        MANAGE_REPORTS,
        "Manage Reports",
        "Ability to view reports pages",
    ),
    (
        MANAGE_DASHBOARDS,
        "Manage Dashboards",
        "Ability to view dashboards pages",
    ),
    (
        MANAGE_REFERENCES,
        "Manage References",
        "Ability to manage reference data",
    ),
];

/// Static role-name -> permission-codes table applied by the seed.
///
/// Re-seeding replaces ALL role_permission links with exactly this mapping;
/// grants added outside it do not survive a re-seed.
pub const ROLE_PERMISSIONS: &[(&str, &[&str])] = &[
    ("ADMIN", &[ADMIN_ALL]),
    ("EMPLOYEE", &[MANAGE_EMPLOYEES, MANAGE_REPORTS]),
];

/// Get the seeded permission codes for a role name
pub fn default_role_permissions(role_name: &str) -> &'static [&'static str] {
    ROLE_PERMISSIONS
        .iter()
        .find(|(name, _)| *name == role_name)
        .map(|(_, codes)| *codes)
        .unwrap_or(&[])
}

/// Validate if a permission code is part of the known vocabulary
pub fn is_known_permission(code: &str) -> bool {
    CATALOG.iter().any(|(c, _, _)| *c == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_role_table() {
        for (_, codes) in ROLE_PERMISSIONS {
            for code in *codes {
                assert!(is_known_permission(code), "unknown code {code}");
            }
        }
    }

    #[test]
    fn default_permissions_per_role() {
        assert_eq!(default_role_permissions("ADMIN"), &[ADMIN_ALL]);
        assert_eq!(
            default_role_permissions("EMPLOYEE"),
            &[MANAGE_EMPLOYEES, MANAGE_REPORTS]
        );
        assert!(default_role_permissions("AUDITOR").is_empty());
    }

    #[test]
    fn catalog_codes_are_unique() {
        for (i, (a, _, _)) in CATALOG.iter().enumerate() {
            for (b, _, _) in &CATALOG[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
