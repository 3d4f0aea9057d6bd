//! Permission Model

use serde::{Deserialize, Serialize};

/// Permission entity (capability descriptor)
///
/// `code` is the stable identifier used by the authorization gate;
/// `name` is display-only and never evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Permission {
    pub id: i64,
    /// Unique string token, convention `<area>:<action>` (e.g. `manage:employees`)
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Create permission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionCreate {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}
