/**
 * Pixel Event Broadcasting
 *
 * This module provides the broadcast gate: the single fan-out point that
 * delivers pixel events to every currently connected viewer.
 *
 * # Broadcasting
 *
 * Events are broadcast using `tokio::sync::broadcast`, a multi-producer,
 * multi-consumer channel. Each subscriber owns an independent bounded
 * queue; a viewer that falls behind lags and loses the oldest events
 * rather than blocking the sender or other viewers. Sessions subscribing
 * after an event was sent do not receive it.
 */

use crate::shared::PixelEvent;
use tokio::sync::broadcast;

/// Default bounded capacity of each viewer's event queue
pub const DEFAULT_BROADCAST_CAPACITY: usize = 1000;

/// Pixel event broadcast channel
///
/// This type represents the broadcast side of the gate. It can be cloned
/// and shared across the watcher and the subscription handlers; calling
/// `subscribe()` registers a new viewer session and dropping the receiver
/// deregisters it.
pub type PixelEventBroadcast = broadcast::Sender<PixelEvent>;

/// Create the broadcast gate with the given per-viewer queue capacity
pub fn pixel_broadcast_channel(capacity: usize) -> PixelEventBroadcast {
    let (tx, _) = broadcast::channel(capacity);
    tx
}

/// Broadcast a pixel event to all currently connected viewers
///
/// Fire-and-forget: delivery to each viewer is independent, and a send
/// with no subscribers is not an error.
///
/// # Returns
///
/// Number of active subscribers that received the event (0 if none)
pub fn broadcast_event(broadcast_tx: &PixelEventBroadcast, event: PixelEvent) -> usize {
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::debug!(
                "[Realtime] Pixel event broadcast to {} viewers",
                subscriber_count
            );
            subscriber_count
        }
        Err(e) => {
            // No subscribers right now, the event is simply dropped
            tracing::debug!("[Realtime] No viewers connected: {:?}", e);
            0
        }
    }
}
