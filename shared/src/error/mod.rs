//! Unified error system for the Heron admin platform
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Role and permission catalog errors
//! - 4xxx: Department errors
//! - 5xxx: Reference data errors
//! - 8xxx: Employee and user errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, ErrorCode};
//!
//! let response = ApiResponse::<()>::error(ErrorCode::RoleNotFound, "Role 7 not found");
//! assert_eq!(response.code, ErrorCode::RoleNotFound.code());
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::ApiResponse;
