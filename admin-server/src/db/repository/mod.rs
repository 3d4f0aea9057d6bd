//! Repository Module
//!
//! CRUD operations over the SQLite schema. Repositories are free functions
//! taking `&SqlitePool`; transactions are only opened where a multi-row
//! write must be atomic (see [`crate::db::seed`]).

pub mod department;
pub mod employee;
pub mod permission;
pub mod reference;
pub mod role;
pub mod user;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
