/**
 * Pixel Model
 *
 * This module defines the persisted pixel record. Identity for grid
 * purposes is the `row` cell index (unique per cell); the `id` UUID is the
 * document key carried by change-feed notifications.
 */

use crate::shared::{PixelEvent, PixelState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pixel record as stored in the database
///
/// Pixels are created and mutated by user claim/paint actions and are never
/// deleted by the application.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pixel {
    /// Unique document key (UUID)
    pub id: Uuid,
    /// Grid cell index (unique per cell)
    pub row: i32,
    /// Semantic color value (e.g. "#ff0000")
    pub color: String,
    /// Lifecycle state
    pub state: PixelState,
    /// User who last claimed this pixel, if any
    pub claimed_by: Option<Uuid>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<&Pixel> for PixelEvent {
    fn from(pixel: &Pixel) -> Self {
        PixelEvent {
            row: pixel.row,
            color: pixel.color.clone(),
            state: pixel.state,
        }
    }
}
