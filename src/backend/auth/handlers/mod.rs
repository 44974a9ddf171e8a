//! Authentication Handlers
//!
//! Route handlers for registration, login, and the authenticated profile.

/// Request/response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;
