/**
 * Database Operations for Pixels
 *
 * This module provides database operations for reading and writing pixel
 * records in PostgreSQL. The claim/paint upsert here is the write that
 * fires the change-feed trigger and, through it, the broadcast to viewers.
 */

use crate::backend::pixelmap::model::Pixel;
use crate::shared::PixelState;
use sqlx::PgPool;
use uuid::Uuid;

/// Load the full pixel grid ordered by cell index
///
/// # Arguments
/// * `pool` - Database connection pool
///
/// # Returns
/// Vector of pixels ordered by row, or error
pub async fn list_pixels(pool: &PgPool) -> Result<Vec<Pixel>, sqlx::Error> {
    let pixels = sqlx::query_as::<_, Pixel>(
        r#"
        SELECT id, "row", color, state, claimed_by, created_at, updated_at
        FROM pixels
        ORDER BY "row"
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(pixels)
}

/// Get a pixel by its document key
///
/// This is the re-fetch used by the change-feed watcher when an update
/// notification arrives without a post-image.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id` - Pixel document key
///
/// # Returns
/// Pixel or None if not found
pub async fn get_pixel_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Pixel>, sqlx::Error> {
    let pixel = sqlx::query_as::<_, Pixel>(
        r#"
        SELECT id, "row", color, state, claimed_by, created_at, updated_at
        FROM pixels
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(pixel)
}

/// Get a pixel by its grid cell index
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `row` - Grid cell index
///
/// # Returns
/// Pixel or None if not found
pub async fn get_pixel_by_row(pool: &PgPool, row: i32) -> Result<Option<Pixel>, sqlx::Error> {
    let pixel = sqlx::query_as::<_, Pixel>(
        r#"
        SELECT id, "row", color, state, claimed_by, created_at, updated_at
        FROM pixels
        WHERE "row" = $1
        "#,
    )
    .bind(row)
    .fetch_optional(pool)
    .await?;

    Ok(pixel)
}

/// Claim or repaint a pixel
///
/// Upserts by cell index: inserts a claimed pixel if the cell has never
/// been painted, otherwise updates color and ownership. Either path commits
/// a write that the change-feed trigger turns into a notification.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `row` - Grid cell index
/// * `color` - New color value
/// * `user_id` - Claiming user
///
/// # Returns
/// The persisted pixel or error
pub async fn claim_pixel(
    pool: &PgPool,
    row: i32,
    color: &str,
    user_id: Uuid,
) -> Result<Pixel, sqlx::Error> {
    let pixel = sqlx::query_as::<_, Pixel>(
        r#"
        INSERT INTO pixels (id, "row", color, state, claimed_by, created_at, updated_at)
        VALUES (gen_random_uuid(), $1, $2, $3, $4, NOW(), NOW())
        ON CONFLICT ("row") DO UPDATE SET
            color = EXCLUDED.color,
            state = EXCLUDED.state,
            claimed_by = EXCLUDED.claimed_by,
            updated_at = NOW()
        RETURNING id, "row", color, state, claimed_by, created_at, updated_at
        "#,
    )
    .bind(row)
    .bind(color)
    .bind(PixelState::Claimed)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(pixel)
}
