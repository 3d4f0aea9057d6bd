//! Unified error codes for the Heron admin platform
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Role and permission catalog errors
//! - 4xxx: Department errors
//! - 5xxx: Reference data errors
//! - 8xxx: Employee and user errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,

    // ==================== 3xxx: Role / Permission catalog ====================
    /// Role not found
    RoleNotFound = 3001,
    /// Role name already exists
    RoleNameExists = 3002,
    /// Role is referenced by users
    RoleInUse = 3003,
    /// Cannot modify/delete system role
    RoleIsSystem = 3004,
    /// Permission not found
    PermissionNotFound = 3101,
    /// Permission code already exists
    PermissionCodeExists = 3102,
    /// Permission code is not part of the known vocabulary
    PermissionCodeUnknown = 3103,

    // ==================== 4xxx: Department ====================
    /// Department not found
    DepartmentNotFound = 4001,
    /// Department name already exists
    DepartmentNameExists = 4002,
    /// Department is referenced by users
    DepartmentInUse = 4003,

    // ==================== 5xxx: Reference data ====================
    /// Reference item not found
    ReferenceNotFound = 5001,
    /// Reference item name already exists
    ReferenceNameExists = 5002,
    /// Unknown reference kind
    ReferenceKindUnknown = 5003,
    /// Reference item is referenced by employees
    ReferenceInUse = 5004,

    // ==================== 8xxx: Employee / User ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee number already exists
    EmployeeNumberExists = 8002,
    /// User not found
    UserNotFound = 8101,
    /// User email already exists
    UserEmailExists = 8102,
    /// User username already exists
    UserUsernameExists = 8103,
    /// Cannot deactivate own account
    UserCannotDeactivateSelf = 8104,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Operation timeout
    TimeoutError = 9003,
    /// Configuration error
    ConfigError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Token is invalid",
            ErrorCode::AccountDisabled => "Account has been disabled",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "A specific role is required",

            // Role / Permission catalog
            ErrorCode::RoleNotFound => "Role not found",
            ErrorCode::RoleNameExists => "Role name already exists",
            ErrorCode::RoleInUse => "Role is referenced by users",
            ErrorCode::RoleIsSystem => "Cannot modify system role",
            ErrorCode::PermissionNotFound => "Permission not found",
            ErrorCode::PermissionCodeExists => "Permission code already exists",
            ErrorCode::PermissionCodeUnknown => "Unknown permission code",

            // Department
            ErrorCode::DepartmentNotFound => "Department not found",
            ErrorCode::DepartmentNameExists => "Department name already exists",
            ErrorCode::DepartmentInUse => "Department is referenced by users",

            // Reference data
            ErrorCode::ReferenceNotFound => "Reference item not found",
            ErrorCode::ReferenceNameExists => "Reference item name already exists",
            ErrorCode::ReferenceKindUnknown => "Unknown reference kind",
            ErrorCode::ReferenceInUse => "Reference item is referenced by employees",

            // Employee / User
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeNumberExists => "Employee number already exists",
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UserEmailExists => "Email already exists",
            ErrorCode::UserUsernameExists => "Username already exists",
            ErrorCode::UserCannotDeactivateSelf => "Cannot deactivate own account",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        use ErrorCode::*;
        let code = match value {
            0 => Success,
            1 => Unknown,
            2 => ValidationFailed,
            3 => NotFound,
            4 => AlreadyExists,
            5 => InvalidRequest,
            6 => InvalidFormat,
            7 => RequiredField,

            1001 => NotAuthenticated,
            1002 => InvalidCredentials,
            1003 => TokenExpired,
            1004 => TokenInvalid,
            1005 => AccountDisabled,

            2001 => PermissionDenied,
            2002 => RoleRequired,

            3001 => RoleNotFound,
            3002 => RoleNameExists,
            3003 => RoleInUse,
            3004 => RoleIsSystem,
            3101 => PermissionNotFound,
            3102 => PermissionCodeExists,
            3103 => PermissionCodeUnknown,

            4001 => DepartmentNotFound,
            4002 => DepartmentNameExists,
            4003 => DepartmentInUse,

            5001 => ReferenceNotFound,
            5002 => ReferenceNameExists,
            5003 => ReferenceKindUnknown,
            5004 => ReferenceInUse,

            8001 => EmployeeNotFound,
            8002 => EmployeeNumberExists,
            8101 => UserNotFound,
            8102 => UserEmailExists,
            8103 => UserUsernameExists,
            8104 => UserCannotDeactivateSelf,

            9001 => InternalError,
            9002 => DatabaseError,
            9003 => TimeoutError,
            9004 => ConfigError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::InvalidCredentials,
            ErrorCode::PermissionDenied,
            ErrorCode::RoleIsSystem,
            ErrorCode::DatabaseError,
        ];
        for code in codes {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw), Ok(code));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(ErrorCode::try_from(7777), Err(InvalidErrorCode(7777)));
    }

    #[test]
    fn serde_uses_numeric_representation() {
        let json = serde_json::to_string(&ErrorCode::RoleNotFound).expect("serialize");
        assert_eq!(json, "3001");
        let parsed: ErrorCode = serde_json::from_str("3001").expect("deserialize");
        assert_eq!(parsed, ErrorCode::RoleNotFound);
    }
}
