/**
 * Change Feed Watcher
 *
 * This module bridges committed pixel writes to the broadcast gate. It
 * consumes the store's change-notification stream and converts each
 * notification into at most one pixel event:
 *
 * - insert: the event is built from the document embedded in the
 *   notification, with no extra lookup
 * - update: the notification carries no post-image, so the watcher
 *   re-fetches the pixel by its document key and emits the current
 *   persisted state
 * - any other operation: ignored
 *
 * # Failure Semantics
 *
 * Every per-item failure (malformed payload, database error, lookup miss
 * on a raced delete) is logged and dropped; the subscription itself is
 * never terminated by one bad item. The NOTIFY transport reconnects under
 * the hood, so transient connection loss surfaces as a logged error
 * followed by resumed consumption.
 *
 * # Ordering
 *
 * Notifications are processed to completion one at a time, so delivery
 * order matches processing completion order. Because the update path takes
 * an extra read, that is best-effort with respect to commit order across
 * different rows.
 */

use sqlx::postgres::PgListener;
use sqlx::PgPool;

use crate::backend::error::BackendError;
use crate::backend::feed::notification::{
    classify, parse_notification, FeedAction, PIXEL_CHANGE_CHANNEL,
};
use crate::backend::pixelmap::db::get_pixel_by_id;
use crate::backend::realtime::broadcast::broadcast_event;
use crate::backend::server::state::AppState;
use crate::shared::PixelEvent;

/// Run the change-feed watcher until the process shuts down
///
/// Opens a listener on the pixel change channel and consumes notifications
/// forever. Call this only after the store connection is established and
/// migrations have run; the returned error therefore only covers the
/// initial subscription, never per-item processing.
pub async fn run_pixel_watcher(state: AppState) -> Result<(), BackendError> {
    let mut listener = PgListener::connect_with(&state.db_pool).await?;
    listener.listen(PIXEL_CHANGE_CHANNEL).await?;

    tracing::info!(
        "[Feed] Watching pixel changes on channel '{}'",
        PIXEL_CHANGE_CHANNEL
    );

    loop {
        let notification = match listener.recv().await {
            Ok(notification) => notification,
            Err(e) => {
                // recv() re-establishes the connection internally; one
                // failed receive only costs the notifications sent while
                // disconnected.
                tracing::error!("[Feed] Change feed interrupted: {:?}", e);
                continue;
            }
        };

        match process_notification(&state.db_pool, notification.payload()).await {
            Ok(Some(event)) => {
                let receivers = broadcast_event(&state.pixel_broadcast, event);
                tracing::debug!("[Feed] Pixel event delivered to {} viewers", receivers);
            }
            Ok(None) => {
                tracing::debug!("[Feed] Ignored non-pixel operation");
            }
            Err(BackendError::LookupMiss { id }) => {
                tracing::warn!(
                    "[Feed] Update for pixel {} raced with a delete, no event emitted",
                    id
                );
            }
            Err(e) => {
                tracing::warn!("[Feed] Failed to process change notification: {}", e);
            }
        }
    }
}

/// Process one raw notification payload into at most one pixel event
///
/// Returns `Ok(Some(event))` for insert/update notifications, `Ok(None)`
/// for ignored operation kinds, and an error for malformed payloads,
/// database failures, or an update whose pixel no longer exists
/// (`BackendError::LookupMiss`).
pub async fn process_notification(
    pool: &PgPool,
    payload: &str,
) -> Result<Option<PixelEvent>, BackendError> {
    let notification = parse_notification(payload)?;

    match classify(notification) {
        FeedAction::Emit(event) => Ok(Some(event)),
        FeedAction::Refetch(id) => {
            let pixel = get_pixel_by_id(pool, id).await?;
            match pixel {
                Some(pixel) => Ok(Some(PixelEvent::from(&pixel))),
                None => Err(BackendError::lookup_miss(id)),
            }
        }
        FeedAction::Ignore => Ok(None),
    }
}
