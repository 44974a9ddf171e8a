/**
 * Pixelmap Route Handlers
 *
 * This module implements the REST handlers for the pixel grid:
 *
 * - `GET /api/v1/pixelmap` - Full pixel list ordered by cell index
 * - `PUT /api/v1/pixelmap/{row}` - Claim or repaint one cell
 *
 * Both routes sit behind the authentication middleware. The PUT handler
 * only persists the write; delivery to connected viewers happens through
 * the change feed, not from here.
 *
 * # Validation
 *
 * - Cell index must be within the grid
 * - Color must be a `#rrggbb` hex value
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::backend::middleware::auth::AuthUser;
use crate::backend::pixelmap::db::{claim_pixel, list_pixels};
use crate::backend::pixelmap::model::Pixel;

/// Number of cells on the grid
pub const GRID_CELLS: i32 = 4096;

/// Claim/paint request body
#[derive(Debug, Deserialize)]
pub struct PaintPixelRequest {
    /// New color value for the cell
    pub color: String,
}

/// Validate a `#rrggbb` color value
fn is_valid_color(color: &str) -> bool {
    let Some(hex) = color.strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Get the full pixel grid (GET /api/v1/pixelmap)
///
/// # Returns
///
/// JSON array of all pixels ordered by cell index
///
/// # Errors
///
/// * `500 Internal Server Error` - If the query fails
pub async fn get_pixelmap(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Pixel>>, (StatusCode, String)> {
    let pixels = list_pixels(&pool).await.map_err(|e| {
        tracing::error!("Failed to load pixelmap: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to load pixelmap".to_string(),
        )
    })?;

    Ok(Json(pixels))
}

/// Claim or repaint a pixel (PUT /api/v1/pixelmap/{row})
///
/// Persists the claim; the change-feed watcher picks up the committed
/// write and broadcasts the resulting pixel event to all viewers.
///
/// # Errors
///
/// * `400 Bad Request` - If the cell index is outside the grid or the color
///   is not a `#rrggbb` value
/// * `500 Internal Server Error` - If persisting the claim fails
pub async fn put_pixel(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(row): Path<i32>,
    Json(request): Json<PaintPixelRequest>,
) -> Result<Json<Pixel>, (StatusCode, String)> {
    if !(0..GRID_CELLS).contains(&row) {
        tracing::warn!("Rejected paint outside grid: row {}", row);
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Cell index must be between 0 and {}", GRID_CELLS - 1),
        ));
    }

    if !is_valid_color(&request.color) {
        tracing::warn!("Rejected invalid color: {}", request.color);
        return Err((
            StatusCode::BAD_REQUEST,
            "Color must be a #rrggbb hex value".to_string(),
        ));
    }

    let pixel = claim_pixel(&pool, row, &request.color, user.user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to persist pixel claim: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to persist pixel".to_string(),
            )
        })?;

    tracing::info!(
        "Pixel {} painted {} by user {}",
        pixel.row,
        pixel.color,
        user.user_id
    );

    Ok(Json(pixel))
}
