/**
 * Current User Handler
 *
 * This module implements the authenticated profile handler for
 * GET /api/v1/user/me. The response includes the accrued point counter.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::middleware::auth::AuthUser;

/// Current user handler
///
/// Returns the authenticated user's profile, including accrued points.
///
/// # Errors
///
/// * `401 Unauthorized` - If no authenticated user is attached (middleware
///   rejects these before the handler runs)
/// * `404 Not Found` - If the user record no longer exists
/// * `500 Internal Server Error` - If the lookup fails
pub async fn get_me(
    State(pool): State<PgPool>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, (StatusCode, String)> {
    let user = get_user_by_id(&pool, auth.user_id).await.map_err(|e| {
        tracing::error!("Failed to load user {}: {:?}", auth.user_id, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server error".to_string(),
        )
    })?;

    let Some(user) = user else {
        tracing::warn!("Authenticated user {} no longer exists", auth.user_id);
        return Err((StatusCode::NOT_FOUND, "User not found".to_string()));
    };

    Ok(Json(UserResponse::from(&user)))
}
