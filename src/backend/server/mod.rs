//! Server Module
//!
//! This module contains all server-side code for initializing and
//! configuring the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Configuration loading and store connection
//! └── init.rs   - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: environment variables into `ServerConfig`
//! 2. **Store Connection**: pool with retry/backoff, then migrations
//! 3. **State Creation**: broadcast gate + `AppState`
//! 4. **Background Tasks**: change-feed watcher and accrual job
//! 5. **Router Creation**: all routes and middleware

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::{create_app, BackgroundTasks};
pub use state::AppState;
