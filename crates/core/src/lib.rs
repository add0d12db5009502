//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the piece/grid simulation: piece layouts, rotation
//! with collision validation, gravity stepping and locking, full-row
//! compaction and game-over detection. It has **no dependencies** on
//! terminals, input devices or rendering:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Synchronous**: every call is one intent or one frame, nothing blocks
//! - **Allocation-free**: the grid is a fixed flat array
//!
//! # Module Structure
//!
//! - [`grid`]: 12x20 occupancy grid with collision and line clearing
//! - [`piece`]: four-block piece model and the seven spawn layouts
//! - [`rotation`]: clockwise pivot rotation and the I-piece toggle
//! - [`game_state`]: intents, gravity steps, locking, scoring, game over
//! - [`rng`]: seeded uniform piece randomizer
//! - [`scoring`]: one point per row and the line-clear speed-up
//! - [`snapshot`]: read-only render view with the falling piece overlaid
//!
//! # Example
//!
//! ```
//! use falltris_core::GameState;
//! use falltris_types::{Intent, DEFAULT_SPEED_THRESHOLD};
//!
//! let mut game = GameState::new(12345);
//! let start = *game.active();
//!
//! // Moves apply immediately
//! assert!(game.apply_intent(Intent::MoveLeft));
//!
//! // Gravity waits for the frame counter to pass the speed threshold
//! for _ in 0..=DEFAULT_SPEED_THRESHOLD {
//!     assert!(!game.tick());
//! }
//! assert!(game.tick());
//! assert_eq!(*game.active(), start.shifted(-1, 1));
//! ```

pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod snapshot;

pub use falltris_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::Grid;
pub use piece::{spawn_layout, Piece};
pub use rng::{PieceRandomizer, SimpleRng};
pub use rotation::{rotate, try_rotate};
pub use scoring::{apply_line_clears, speed_after_clears, LineClearResult};
pub use snapshot::GameSnapshot;
