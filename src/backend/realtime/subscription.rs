/**
 * Viewer Subscription Handler
 *
 * This module implements the Server-Sent Events (SSE) subscription handler
 * for the `GET /api/v1/socket` endpoint. Every connected client receives
 * one `newPixel` SSE event per pixel event emitted by the change-feed
 * watcher.
 *
 * # Connection Management
 *
 * - Subscribing to the broadcast channel happens when the request arrives;
 *   events sent before that are not replayed
 * - Dropping the connection drops the receiver, which deregisters the
 *   session
 * - Connections are kept alive using the SSE keep-alive mechanism
 * - A viewer that falls behind its bounded queue lags: the skipped count is
 *   logged and the stream continues with the newest events
 *
 * # Access
 *
 * This endpoint is intentionally unauthenticated: the stream is a
 * world-readable view of the grid, while mutations stay behind the
 * authenticated REST routes.
 */

use crate::backend::realtime::broadcast::PixelEventBroadcast;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;

/// Handle a viewer subscription (GET /api/v1/socket)
///
/// Subscribes the connection to the broadcast gate and yields one
/// `newPixel` SSE event per pixel event, serialized as JSON.
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
///
/// event: newPixel
/// data: {"row":5,"color":"#ff0000","state":"claimed"}
/// ```
pub async fn handle_pixel_subscription(
    State(broadcast_tx): State<PixelEventBroadcast>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>> {
    let broadcast_rx = broadcast_tx.subscribe();
    tracing::info!("[Realtime] Viewer connected");

    let stream = stream::unfold(broadcast_rx, move |mut rx| async move {
        // Loop until we have an event worth sending; keep-alive comments
        // are injected by axum, so nothing needs to be emitted while idle
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let event_data = match serde_json::to_string(&event) {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("[Realtime] Failed to serialize pixel event: {:?}", e);
                            continue;
                        }
                    };

                    let sse_event = Event::default().event("newPixel").data(event_data);
                    return Some((Ok(sse_event), rx));
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    // Bounded queue overflowed for this viewer; drop the
                    // oldest events and keep going
                    tracing::warn!("[Realtime] Viewer lagged, skipped {} events", skipped);
                    continue;
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                    tracing::warn!("[Realtime] Broadcast channel closed, ending stream");
                    return None;
                }
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
