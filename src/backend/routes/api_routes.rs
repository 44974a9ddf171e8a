/**
 * API Route Handlers
 *
 * This module configures the versioned API routes:
 *
 * ## Authentication (public)
 * - `POST /api/v1/auth/register` - User registration
 * - `POST /api/v1/auth/login` - User login
 *
 * ## Pixelmap (requires authentication)
 * - `GET /api/v1/pixelmap` - Full pixel grid
 * - `PUT /api/v1/pixelmap/{row}` - Claim/paint one cell
 *
 * ## User (requires authentication)
 * - `GET /api/v1/user/me` - Current profile with accrued points
 *
 * The pixelmap and user groups sit behind the authentication middleware;
 * the auth group is public, mirroring which route groups the original
 * deployment gates.
 */

use axum::{middleware, Router};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::pixelmap::handlers::{get_pixelmap, put_pixel};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Application state, needed to instantiate the auth layer
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    // Public authentication endpoints
    let router = router
        .route("/api/v1/auth/register", axum::routing::post(register))
        .route("/api/v1/auth/login", axum::routing::post(login));

    // Authenticated route groups
    let protected = Router::new()
        .route("/api/v1/pixelmap", axum::routing::get(get_pixelmap))
        .route("/api/v1/pixelmap/{row}", axum::routing::put(put_pixel))
        .route("/api/v1/user/me", axum::routing::get(get_me))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router.merge(protected)
}
