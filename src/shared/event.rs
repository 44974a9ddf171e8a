/**
 * Pixel Events
 *
 * This module defines the event types delivered to connected viewers over
 * the broadcast channel. A `PixelEvent` is the minimal projection of a
 * pixel record: it carries only the fields a viewer needs to repaint one
 * cell, and it is never persisted.
 */
use serde::{Deserialize, Serialize};

/// Lifecycle state of a pixel on the grid
///
/// Pixels start out `free` and become `claimed` once a user paints them.
/// Stored in the database as the `pixel_state` enum and serialized in
/// lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "pixel_state", rename_all = "lowercase")]
pub enum PixelState {
    /// Unclaimed cell
    Free,
    /// Cell painted by a user
    Claimed,
}

/// Pixel event broadcast to all connected viewers
///
/// This is an ephemeral projection of a pixel record. Every broadcast event
/// corresponds to a write that has already committed in the store; the
/// broadcast is a side effect of confirmed persistence, never the reverse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelEvent {
    /// Grid cell index
    pub row: i32,
    /// Semantic color value (e.g. "#ff0000")
    pub color: String,
    /// Current lifecycle state
    pub state: PixelState,
}

impl PixelEvent {
    /// Create a new pixel event
    pub fn new(row: i32, color: impl Into<String>, state: PixelState) -> Self {
        Self {
            row,
            color: color.into(),
            state,
        }
    }
}
