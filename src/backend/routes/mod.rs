//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router assembly
//! └── api_routes.rs - Versioned API routes
//! ```

/// Main router assembly
pub mod router;

/// Versioned API routes
pub mod api_routes;

pub use router::create_router;
