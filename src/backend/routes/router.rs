/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Viewer subscription (SSE, public)
 * 2. API routes (auth public; pixelmap and user behind auth middleware)
 * 3. Static file serving
 * 4. Fallback handler (404)
 */

use axum::Router;
use tower_http::services::ServeDir;

use crate::backend::realtime::subscription::handle_pixel_subscription;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the database pool and the
///   broadcast gate
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    // Viewer subscription endpoint; intentionally outside the auth layer
    let router = Router::new().route(
        "/api/v1/socket",
        axum::routing::get(handle_pixel_subscription),
    );

    // Add API routes
    let router = configure_api_routes(router, &app_state);

    // Add static file serving
    let router = router.nest_service("/static", ServeDir::new("public"));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    // Use AppState as router state
    router.with_state(app_state)
}
