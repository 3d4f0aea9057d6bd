//! API response envelope

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Unified API response format
///
/// ```json
/// {
///   "code": 0,
///   "message": "Operation completed successfully",
///   "data": { ... }
/// }
/// ```
///
/// `code` is the numeric [`ErrorCode`] value; `0` means success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Numeric error code (0 = success)
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Response payload, omitted on errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response with payload
    pub fn success(data: T) -> Self {
        Self {
            code: ErrorCode::Success.code(),
            message: ErrorCode::Success.message().to_string(),
            data: Some(data),
        }
    }

    /// Successful response without payload
    pub fn ok() -> Self {
        Self {
            code: ErrorCode::Success.code(),
            message: ErrorCode::Success.message().to_string(),
            data: None,
        }
    }

    /// Error response with a custom message
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
        }
    }

    /// Error response using the code's default message
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code: code.code(),
            message: code.message().to_string(),
            data: None,
        }
    }

    /// Whether this response carries a success code
    pub fn is_success(&self) -> bool {
        self.code == ErrorCode::Success.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_payload() {
        let resp = ApiResponse::success(vec![1, 2, 3]);
        assert!(resp.is_success());
        assert_eq!(resp.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn error_omits_data_field() {
        let resp = ApiResponse::<()>::error(ErrorCode::RoleNotFound, "Role 9 not found");
        let json = serde_json::to_string(&resp).expect("serialize");
        assert!(!json.contains("data"));
        assert!(json.contains("3001"));
    }
}
