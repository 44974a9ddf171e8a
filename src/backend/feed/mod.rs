//! Change Feed Module
//!
//! The bridge between persisted mutations and the broadcast gate. The
//! store's row triggers publish one notification per committed pixel
//! write; the watcher here consumes that stream, normalizes each
//! notification into a pixel event, and hands it to the broadcast channel.
//!
//! # Module Structure
//!
//! ```text
//! feed/
//! ├── mod.rs          - Module exports and documentation
//! ├── notification.rs - Typed notification envelope and classification
//! └── watcher.rs      - The watcher loop and per-item processing
//! ```
//!
//! # Delivery Semantics
//!
//! Notifications fire after commit, so every broadcast event corresponds
//! to durably persisted state. Delivery to viewers is at-most-once per
//! connected session with no replay for late subscribers.

/// Typed notification envelope and classification
pub mod notification;

/// Watcher loop and per-item processing
pub mod watcher;

pub use notification::{ChangeNotification, FeedAction, PIXEL_CHANGE_CHANNEL};
pub use watcher::{process_notification, run_pixel_watcher};
