//! Axum extractors enforcing authentication and authorization.

pub mod auth;
pub mod rbac;
