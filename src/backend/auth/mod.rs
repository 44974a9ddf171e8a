//! Authentication Module
//!
//! User management, bcrypt password hashing, and JWT session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports and documentation
//! ├── users.rs    - User model and database operations
//! ├── sessions.rs - JWT token creation and verification
//! └── handlers/   - Register, login, and profile handlers
//! ```

/// User model and database operations
pub mod users;

/// JWT session tokens
pub mod sessions;

/// Route handlers
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use users::User;
