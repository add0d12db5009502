use crate::game_state::GameState;
use crate::piece::Piece;
use crate::types::{PieceKind, ViewCell, GRID_HEIGHT, GRID_WIDTH};

/// Read-only render view of a game: locked cells with the falling piece
/// overlaid, plus everything the side panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[ViewCell; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub active_kind: Option<PieceKind>,
    pub next: Option<Piece>,
    pub score: u32,
    pub speed_threshold: u32,
    pub paused: bool,
    pub game_over: bool,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Number of cells with the given view state
    pub fn count(&self, cell: ViewCell) -> usize {
        self.board.iter().flatten().filter(|c| **c == cell).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[ViewCell::Empty; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active_kind: None,
            next: None,
            score: 0,
            speed_threshold: 0,
            paused: false,
            game_over: false,
            seed: 0,
        }
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        state.snapshot()
    }
}
