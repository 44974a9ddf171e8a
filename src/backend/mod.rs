//! Backend Module
//!
//! This module contains all server-side code for the pixelboard
//! application: an Axum HTTP server over a PostgreSQL store, a change-feed
//! watcher bridging committed pixel writes to a broadcast gate, and a
//! periodic accrual job.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`pixelmap`** - Pixel model, database operations, REST handlers
//! - **`feed`** - Change-feed watcher and notification types
//! - **`realtime`** - Broadcast gate and SSE viewer subscriptions
//! - **`accrual`** - Periodic point-accrual job
//! - **`auth`** - Authentication, JWT tokens, user management
//! - **`middleware`** - Request processing middleware
//! - **`error`** - Backend-specific error types
//!
//! # Control Flow
//!
//! A client mutation goes through the authenticated REST layer and commits
//! in the store. The store's trigger publishes a change notification; the
//! watcher normalizes it into a pixel event and hands it to the broadcast
//! gate, which fans it out to every connected viewer session. The accrual
//! job runs on its own schedule, untouched by the request/broadcast path.
//!
//! # State Management
//!
//! `AppState` is built once at startup and passed to the router and the
//! background tasks. It holds the database pool and the broadcast sender;
//! both are cheaply cloneable and thread-safe.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Pixel grid model, persistence, and handlers
pub mod pixelmap;

/// Change-feed watcher
pub mod feed;

/// Real-time broadcast system
pub mod realtime;

/// Periodic accrual job
pub mod accrual;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use feed::{process_notification, run_pixel_watcher};
pub use realtime::{broadcast_event, handle_pixel_subscription, PixelEventBroadcast};
pub use server::{create_app, AppState, ServerConfig};
