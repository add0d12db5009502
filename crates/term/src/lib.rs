//! Terminal rendering for falltris.
//!
//! Snapshots are drawn into a plain framebuffer, which is then flushed to the
//! terminal with run-length diffs. Cells are two columns wide by default to
//! make the playfield look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falltris_core as core;
pub use falltris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
