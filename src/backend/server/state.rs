/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the explicitly constructed context object for the whole
 * process: it is built once at startup and handed to the router, the
 * change-feed watcher, and the broadcast gate. Nothing in the backend
 * reaches for module-level singletons.
 *
 * # Thread Safety
 *
 * - `PgPool` is internally reference-counted and thread-safe
 * - `broadcast::Sender` is thread-safe and can be cloned
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::realtime::broadcast::PixelEventBroadcast;

/// Application state shared by handlers and background tasks
///
/// This struct serves as the central state container for the Axum
/// application. It implements `FromRef` for its fields to allow handlers
/// to extract just the part they need.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (source of truth for pixels and users)
    pub db_pool: PgPool,

    /// Broadcast gate delivering pixel events to connected viewers
    ///
    /// The change-feed watcher is the only producer; every SSE session
    /// holds one subscribed receiver.
    pub pixel_broadcast: PixelEventBroadcast,
}

/// Allow handlers to extract the database pool directly
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract the broadcast gate directly
impl FromRef<AppState> for PixelEventBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pixel_broadcast.clone()
    }
}
