//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the HTTP API surface and the backend internals. All types are designed
//! for serialization and transmission over HTTP.

/// Pixel event types broadcast to viewers
pub mod event;

/// Shared error types
pub mod error;

pub use error::SharedError;
pub use event::{PixelEvent, PixelState};
