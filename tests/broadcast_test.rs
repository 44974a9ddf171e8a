//! Broadcast gate integration tests
//!
//! Exercises viewer-set semantics: who receives an event depends only on
//! who is subscribed at the moment it is sent, and one slow viewer never
//! affects the others.

use pixelboard::backend::realtime::broadcast::{broadcast_event, pixel_broadcast_channel};
use pixelboard::shared::{PixelEvent, PixelState};
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

fn event(row: i32) -> PixelEvent {
    PixelEvent::new(row, "#ff0000", PixelState::Claimed)
}

#[tokio::test]
async fn test_disconnected_viewer_is_skipped() {
    let tx = pixel_broadcast_channel(100);

    let mut viewer_a = tx.subscribe();
    let viewer_b = tx.subscribe();
    let mut viewer_c = tx.subscribe();

    // B disconnects before the broadcast begins
    drop(viewer_b);

    let delivered = broadcast_event(&tx, event(1));
    assert_eq!(delivered, 2);

    assert_eq!(viewer_a.recv().await.unwrap(), event(1));
    assert_eq!(viewer_c.recv().await.unwrap(), event(1));
}

#[tokio::test]
async fn test_late_viewer_gets_no_replay() {
    let tx = pixel_broadcast_channel(100);
    let mut early = tx.subscribe();

    broadcast_event(&tx, event(1));

    // D connects after the broadcast completed
    let mut late = tx.subscribe();

    assert_eq!(early.recv().await.unwrap(), event(1));
    assert!(matches!(late.try_recv(), Err(TryRecvError::Empty)));

    // D does receive subsequent events
    broadcast_event(&tx, event(2));
    assert_eq!(late.recv().await.unwrap(), event(2));
}

#[tokio::test]
async fn test_events_delivered_in_send_order() {
    let tx = pixel_broadcast_channel(100);
    let mut rx = tx.subscribe();

    for row in 0..5 {
        broadcast_event(&tx, event(row));
    }

    for row in 0..5 {
        assert_eq!(rx.recv().await.unwrap().row, row);
    }
}

#[tokio::test]
async fn test_slow_viewer_drops_oldest_events() {
    // Small per-viewer queue so the overflow policy is observable
    let tx = pixel_broadcast_channel(4);
    let mut slow = tx.subscribe();
    let mut fast = tx.subscribe();

    // The fast viewer keeps up with every send; the slow one reads nothing
    for row in 0..10 {
        broadcast_event(&tx, event(row));
        assert_eq!(fast.recv().await.unwrap().row, row);
    }

    // The slow viewer lost the oldest events, keeps the newest, and the
    // sender was never blocked
    match slow.recv().await {
        Err(RecvError::Lagged(skipped)) => assert_eq!(skipped, 6),
        other => panic!("Expected lag, got {:?}", other),
    }
    assert_eq!(slow.recv().await.unwrap().row, 6);
    assert_eq!(slow.recv().await.unwrap().row, 7);
}
