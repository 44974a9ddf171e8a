/**
 * Change Notifications
 *
 * This module defines the typed envelope for change-feed notifications and
 * the pure classification step that decides what the watcher does with
 * each one.
 *
 * # Payload Shape
 *
 * The pixel table trigger publishes one JSON payload per committed write on
 * a single NOTIFY channel:
 *
 * - insert: `{"operation":"insert","id":"...","document":{"row":5,"color":"#ff0000","state":"claimed"}}`
 * - update: `{"operation":"update","id":"..."}` (no post-image)
 * - anything else: `{"operation":"delete",...}` etc.
 *
 * The envelope is a tagged enum so unsupported operation kinds are handled
 * exhaustively instead of falling through a stringly-typed default.
 */

use crate::backend::error::BackendError;
use crate::shared::{PixelEvent, PixelState};
use serde::Deserialize;
use uuid::Uuid;

/// NOTIFY channel the pixel table trigger publishes on
pub const PIXEL_CHANGE_CHANNEL: &str = "pixel_changes";

/// Pixel fields embedded in an insert notification
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PixelDocument {
    /// Grid cell index
    pub row: i32,
    /// Color value
    pub color: String,
    /// Lifecycle state
    pub state: PixelState,
}

/// One change notification consumed from the feed
///
/// Insert notifications embed the full document; update notifications carry
/// only the document key and require a re-fetch. Every other operation kind
/// decodes to `Other` and is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum ChangeNotification {
    /// A new pixel row committed; the full document is embedded
    Insert {
        /// Document key
        id: Uuid,
        /// Embedded full document
        document: PixelDocument,
    },
    /// An existing pixel row changed; no post-image is included
    Update {
        /// Document key
        id: Uuid,
    },
    /// Any other operation kind (delete, truncate, ...)
    #[serde(other)]
    Other,
}

/// What the watcher should do with one classified notification
#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    /// Broadcast this event as-is (insert path, no extra lookup)
    Emit(PixelEvent),
    /// Re-fetch the pixel by document key, then broadcast the fresh state
    Refetch(Uuid),
    /// Not a pixel mutation viewers care about
    Ignore,
}

/// Decode a raw NOTIFY payload into a typed notification
pub fn parse_notification(payload: &str) -> Result<ChangeNotification, BackendError> {
    serde_json::from_str(payload).map_err(|e| {
        BackendError::feed(format!("Malformed change notification payload: {}", e))
    })
}

/// Classify a notification into the action the watcher takes
///
/// Pure function: the insert path builds the event straight from the
/// embedded document, the update path defers to a fresh read, and every
/// other operation kind is dropped without error.
pub fn classify(notification: ChangeNotification) -> FeedAction {
    match notification {
        ChangeNotification::Insert { document, .. } => FeedAction::Emit(PixelEvent {
            row: document.row,
            color: document.color,
            state: document.state,
        }),
        ChangeNotification::Update { id } => FeedAction::Refetch(id),
        ChangeNotification::Other => FeedAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_insert() {
        let payload = r##"{"operation":"insert","id":"4be39ff6-52cb-44a7-9c2d-21f545f25bd1","document":{"row":5,"color":"#ff0000","state":"claimed"}}"##;
        let notification = parse_notification(payload).unwrap();
        match notification {
            ChangeNotification::Insert { document, .. } => {
                assert_eq!(document.row, 5);
                assert_eq!(document.color, "#ff0000");
                assert_eq!(document.state, PixelState::Claimed);
            }
            other => panic!("Expected Insert, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_update() {
        let payload = r#"{"operation":"update","id":"4be39ff6-52cb-44a7-9c2d-21f545f25bd1"}"#;
        let notification = parse_notification(payload).unwrap();
        assert!(matches!(notification, ChangeNotification::Update { .. }));
    }

    #[test]
    fn test_parse_other_operations() {
        for payload in [
            r#"{"operation":"delete","id":"4be39ff6-52cb-44a7-9c2d-21f545f25bd1"}"#,
            r#"{"operation":"truncate"}"#,
            r#"{"operation":"replace","id":"4be39ff6-52cb-44a7-9c2d-21f545f25bd1"}"#,
        ] {
            let notification = parse_notification(payload).unwrap();
            assert_eq!(notification, ChangeNotification::Other);
        }
    }

    #[test]
    fn test_parse_malformed_payload() {
        let result = parse_notification("not json at all");
        assert!(matches!(result, Err(BackendError::FeedError { .. })));
    }

    #[test]
    fn test_classify_insert_emits_embedded_document() {
        let notification = ChangeNotification::Insert {
            id: Uuid::new_v4(),
            document: PixelDocument {
                row: 5,
                color: "#ff0000".to_string(),
                state: PixelState::Claimed,
            },
        };

        let action = classify(notification);
        assert_eq!(
            action,
            FeedAction::Emit(PixelEvent::new(5, "#ff0000", PixelState::Claimed))
        );
    }

    #[test]
    fn test_classify_update_defers_to_refetch() {
        let id = Uuid::new_v4();
        let action = classify(ChangeNotification::Update { id });
        assert_eq!(action, FeedAction::Refetch(id));
    }

    #[test]
    fn test_classify_other_is_ignored() {
        assert_eq!(classify(ChangeNotification::Other), FeedAction::Ignore);
    }
}
