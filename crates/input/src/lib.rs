//! Terminal input module (core-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Intent`]s and provides a soft
//! drop latch suitable for terminals without key-release events.

pub mod handler;
pub mod map;

pub use falltris_types as types;

pub use handler::SoftDropLatch;
pub use map::{handle_key_event, should_quit, should_restart};
