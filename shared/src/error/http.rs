//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code conventionally used for this error
    pub fn http_status(&self) -> StatusCode {
        use ErrorCode::*;
        match self {
            Success => StatusCode::OK,

            // General
            ValidationFailed | InvalidRequest | InvalidFormat | RequiredField => {
                StatusCode::BAD_REQUEST
            }
            NotFound => StatusCode::NOT_FOUND,
            AlreadyExists => StatusCode::CONFLICT,
            Unknown => StatusCode::INTERNAL_SERVER_ERROR,

            // Auth
            NotAuthenticated | TokenExpired | TokenInvalid => StatusCode::UNAUTHORIZED,
            InvalidCredentials => StatusCode::BAD_REQUEST,
            AccountDisabled => StatusCode::FORBIDDEN,

            // Permission
            PermissionDenied | RoleRequired => StatusCode::FORBIDDEN,

            // Role / Permission catalog
            RoleNotFound | PermissionNotFound => StatusCode::NOT_FOUND,
            RoleNameExists | PermissionCodeExists => StatusCode::CONFLICT,
            RoleInUse | RoleIsSystem | PermissionCodeUnknown => StatusCode::BAD_REQUEST,

            // Department
            DepartmentNotFound => StatusCode::NOT_FOUND,
            DepartmentNameExists => StatusCode::CONFLICT,
            DepartmentInUse => StatusCode::BAD_REQUEST,

            // Reference data
            ReferenceNotFound => StatusCode::NOT_FOUND,
            ReferenceNameExists => StatusCode::CONFLICT,
            ReferenceKindUnknown | ReferenceInUse => StatusCode::BAD_REQUEST,

            // Employee / User
            EmployeeNotFound | UserNotFound => StatusCode::NOT_FOUND,
            EmployeeNumberExists | UserEmailExists | UserUsernameExists => StatusCode::CONFLICT,
            UserCannotDeactivateSelf => StatusCode::BAD_REQUEST,

            // System
            InternalError | DatabaseError | ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
            TimeoutError => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_codes_map_to_401() {
        assert_eq!(
            ErrorCode::NotAuthenticated.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ErrorCode::TokenExpired.http_status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn permission_codes_map_to_403() {
        assert_eq!(
            ErrorCode::PermissionDenied.http_status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn credential_failure_is_a_plain_400() {
        // Uniform login failure: same status as any invalid request
        assert_eq!(
            ErrorCode::InvalidCredentials.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
