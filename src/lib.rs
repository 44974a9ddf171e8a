//! Pixelboard - Main Library
//!
//! Pixelboard is a collaborative pixel-canvas backend. Authenticated users
//! claim and color pixels on a shared grid; committed writes propagate in
//! real time to connected viewers; a periodic job grants users accrual
//! points.
//!
//! # Overview
//!
//! This library provides:
//! - An Axum HTTP server with authenticated REST routes for the grid
//! - A change-feed watcher bridging the PostgreSQL store to a broadcast
//!   gate (the real-time change-propagation path)
//! - An SSE endpoint fanning pixel events out to every connected viewer
//! - A periodic accrual job incrementing each user's point counter
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared across the API surface
//!   (pixel events, shared errors)
//! - **`backend`** - Server-side code (Axum server, store access,
//!   change feed, broadcast, accrual, auth)
//!
//! # Delivery Semantics
//!
//! Events are broadcast only for writes that have already committed in the
//! store. Delivery to viewers is at-most-once per connected session:
//! no replay for late subscribers, no acknowledgment, and a slow viewer
//! drops its oldest queued events rather than blocking anyone else.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
