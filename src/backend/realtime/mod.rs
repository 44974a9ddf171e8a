//! Real-time Module
//!
//! The broadcast gate and its viewer-facing subscription endpoint. The
//! change-feed watcher pushes pixel events into the gate; every connected
//! SSE session receives its own copy.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Broadcast gate over tokio::sync::broadcast
//! └── subscription.rs - SSE subscription handler
//! ```

/// Broadcast gate
pub mod broadcast;

/// SSE subscription handler
pub mod subscription;

pub use broadcast::{
    broadcast_event, pixel_broadcast_channel, PixelEventBroadcast, DEFAULT_BROADCAST_CAPACITY,
};
pub use subscription::handle_pixel_subscription;
