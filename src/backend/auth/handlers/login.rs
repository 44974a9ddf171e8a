/**
 * Login Handler
 *
 * This module implements the user login handler for POST /api/v1/auth/login.
 *
 * # Login Process
 *
 * 1. Look up the user by username (or email as a fallback)
 * 2. Verify the password against the stored bcrypt hash
 * 3. Generate JWT token
 * 4. Return token and user info
 *
 * # Security
 *
 * An unknown user and a wrong password produce the same 401 response, so
 * the endpoint does not leak which usernames exist.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::verify;
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{get_user_by_email, get_user_by_username};

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the user is unknown or the password is wrong
/// * `500 Internal Server Error` - If verification or token generation fails
pub async fn login(
    State(pool): State<PgPool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    tracing::info!("Login request for: {}", request.username);

    // Look up by username first, then by email for convenience
    let user = match get_user_by_username(&pool, &request.username).await {
        Ok(Some(user)) => Some(user),
        Ok(None) => get_user_by_email(&pool, &request.username)
            .await
            .unwrap_or(None),
        Err(e) => {
            tracing::error!("Failed to look up user: {:?}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error".to_string(),
            ));
        }
    };

    let Some(user) = user else {
        tracing::warn!("Login failed, unknown user: {}", request.username);
        return Err((StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()));
    };

    // Verify password
    let password_ok = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Failed to verify password: {:?}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
    })?;

    if !password_ok {
        tracing::warn!("Login failed, wrong password for: {}", request.username);
        return Err((StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()));
    }

    // Create token
    let token = create_token(user.id, user.email.clone()).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
    })?;

    tracing::info!("User logged in: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(&user),
    }))
}
