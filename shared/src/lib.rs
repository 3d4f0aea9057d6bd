//! Shared types for the Heron admin platform
//!
//! Common types used across crates: data models, unified error codes,
//! API response structures, and client-facing DTOs.

pub mod client;
pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, ErrorCategory, ErrorCode};
