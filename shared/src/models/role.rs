//! Role Model

use serde::{Deserialize, Serialize};

/// Role entity (RBAC authorization group)
///
/// Permission grants live in the `role_permission` join table, not on the
/// role row itself; use [`RolePermissions`] for the resolved view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// System roles cannot be modified or deleted through the API
    pub is_system: bool,
    pub is_active: bool,
}

/// Role with its resolved permission codes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePermissions {
    pub role_id: i64,
    pub role_name: String,
    /// Deduplicated permission codes granted to the role
    pub permissions: Vec<String>,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCreate {
    pub name: String,
    pub description: Option<String>,
    /// Permission codes to grant on creation
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Update role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
