/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: state creation, database connection, background tasks, and
 * route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to the store (with retry) and run migrations
 * 2. Create the broadcast gate
 * 3. Construct `AppState` and hand it to the background tasks:
 *    the change-feed watcher and the periodic accrual job
 * 4. Create and configure the router
 *
 * The change-feed watcher is only started after the store connection is
 * established, so every notification it sees refers to committed state it
 * can re-fetch.
 *
 * # Lifecycle
 *
 * Background task handles are returned to the caller in
 * [`BackgroundTasks`]; on shutdown the HTTP server drains first and the
 * tasks are then torn down explicitly.
 */

use axum::Router;
use tokio::task::JoinHandle;

use crate::backend::accrual::run_accrual_job;
use crate::backend::error::BackendError;
use crate::backend::feed::watcher::run_pixel_watcher;
use crate::backend::realtime::broadcast::pixel_broadcast_channel;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Handles for the long-running background tasks
///
/// Both tasks run for the lifetime of the process; `shutdown` aborts them
/// once the HTTP server has drained.
pub struct BackgroundTasks {
    watcher: JoinHandle<()>,
    accrual: JoinHandle<()>,
}

impl BackgroundTasks {
    /// Tear down the background tasks
    pub fn shutdown(self) {
        self.watcher.abort();
        self.accrual.abort();
        tracing::info!("Background tasks stopped");
    }
}

/// Create and configure the Axum application
///
/// # Returns
///
/// The configured router plus handles for the spawned background tasks
///
/// # Errors
///
/// Fails if the store stays unreachable after the retry budget or if
/// migrations cannot be applied. Nothing here is optional: without the
/// store there is no grid to serve.
pub async fn create_app(config: &ServerConfig) -> Result<(Router<()>, BackgroundTasks), BackendError> {
    tracing::info!("Initializing pixelboard backend server");

    // Step 1: Connect to the store and run migrations
    let db_pool = connect_database(&config.database_url).await?;

    // Step 2: Create the broadcast gate
    let pixel_broadcast = pixel_broadcast_channel(config.broadcast_capacity);

    // Step 3: Build the shared context object
    let app_state = AppState {
        db_pool,
        pixel_broadcast,
    };

    // Step 4: Start the change-feed watcher; the store is ready, so the
    // subscription opens against committed state
    let watcher_state = app_state.clone();
    let watcher = tokio::spawn(async move {
        if let Err(e) = run_pixel_watcher(watcher_state).await {
            tracing::error!("[Feed] Watcher terminated: {}", e);
        }
    });

    // Step 5: Start the periodic accrual job
    let accrual_pool = app_state.db_pool.clone();
    let accrual_interval = config.accrual_interval;
    let accrual = tokio::spawn(async move {
        run_accrual_job(accrual_pool, accrual_interval).await;
    });

    tracing::info!(
        "Change-feed watcher and accrual job started (accrual every {:?})",
        config.accrual_interval
    );

    // Step 6: Create router with all routes
    let app = create_router(app_state);

    Ok((app, BackgroundTasks { watcher, accrual }))
}
