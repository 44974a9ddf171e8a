//! Property tests for change-notification parsing and classification

use pixelboard::backend::feed::notification::{classify, parse_notification, FeedAction};
use proptest::prelude::*;

proptest! {
    /// Every operation tag other than insert/update classifies as ignored
    #[test]
    fn unknown_operations_are_ignored(op in "[a-z]{1,12}") {
        prop_assume!(op != "insert" && op != "update");

        let payload = format!(
            r#"{{"operation":"{}","id":"4be39ff6-52cb-44a7-9c2d-21f545f25bd1"}}"#,
            op
        );
        let notification = parse_notification(&payload).unwrap();
        prop_assert_eq!(classify(notification), FeedAction::Ignore);
    }

    /// Arbitrary garbage payloads error cleanly, never panic
    #[test]
    fn malformed_payloads_never_panic(payload in ".{0,200}") {
        let _ = parse_notification(&payload);
    }

    /// Well-formed insert payloads emit exactly the embedded fields
    #[test]
    fn insert_emits_embedded_fields(row in 0..4096i32, color in "#[0-9a-f]{6}") {
        let payload = format!(
            r#"{{"operation":"insert","id":"4be39ff6-52cb-44a7-9c2d-21f545f25bd1","document":{{"row":{},"color":"{}","state":"free"}}}}"#,
            row, color
        );
        let notification = parse_notification(&payload).unwrap();
        match classify(notification) {
            FeedAction::Emit(event) => {
                prop_assert_eq!(event.row, row);
                prop_assert_eq!(event.color, color);
            }
            other => prop_assert!(false, "Expected Emit, got {:?}", other),
        }
    }
}
