//! HTTP API modules - one router + handler pair per resource

pub mod auth;
pub mod departments;
pub mod employees;
pub mod health;
pub mod permissions;
pub mod references;
pub mod reports;
pub mod roles;
pub mod users;
