//! Falltris (workspace facade crate).
//!
//! Re-exports the workspace crates under `falltris::{core,input,term,types}`
//! so the binary, benches and integration tests share one import path.

pub use falltris_core as core;
pub use falltris_input as input;
pub use falltris_term as term;
pub use falltris_types as types;
