//! Middleware Module
//!
//! Request-processing middleware. Currently authentication only.

/// Authentication middleware
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
