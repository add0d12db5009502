//! Core types module - shared data structures and constants
//!
//! Plain data used by every crate in the workspace: the simulation core,
//! the key mapping, and the terminal view. Nothing in here performs I/O.
//!
//! # Grid Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn pivot**: (5, 1); row 0 is the game-over row
//!
//! # Speed Constants
//!
//! Gravity is counted in frames, not milliseconds. A piece falls one row once
//! the frame counter exceeds the current speed threshold.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the outer loop (~60 FPS) |
//! | `DEFAULT_SPEED_THRESHOLD` | 20 | Frames per gravity step at game start |
//! | `SOFT_DROP_THRESHOLD` | 1 | Frames per gravity step while soft dropping |
//! | `MIN_SPEED_THRESHOLD` | 5 | Floor for the line-clear speed-up |
//! | `SOFT_DROP_GRACE_MS` | 150 | Soft drop auto-release without key-up events |
//!
//! # Examples
//!
//! ```
//! use falltris_types::{Intent, Orientation, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let kind = PieceKind::from_str("sqr").unwrap();
//! assert_eq!(kind, PieceKind::Sqr);
//!
//! assert_eq!(Orientation::Horizontal.toggled(), Orientation::Vertical);
//! assert_eq!(Intent::from_str("rotateCw"), Some(Intent::RotateCw));
//!
//! assert_eq!(GRID_WIDTH, 12);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (12 columns)
pub const GRID_WIDTH: u8 = 12;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Fixed frame interval of the outer loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Frames per gravity step at the start of a game
pub const DEFAULT_SPEED_THRESHOLD: u32 = 20;

/// Frames per gravity step while the soft drop key is held
pub const SOFT_DROP_THRESHOLD: u32 = 1;

/// Line clears never push the speed threshold below this value
pub const MIN_SPEED_THRESHOLD: u32 = 5;

/// Soft drop state timeout for terminals that never report key releases
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// Pivot position of every freshly spawned piece except Z (col, row)
pub const SPAWN_PIVOT: Position = Position::new(5, 1);


/// A grid coordinate.
///
/// Signed so that rotation candidates may step outside the grid before they
/// are validated. Committed piece positions always satisfy [`Position::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: i8,
    pub row: i8,
}

impl Position {
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// Translate by (dc, dr)
    pub const fn offset(self, dc: i8, dr: i8) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }

    /// Check if the position lies inside the 12x20 grid
    pub const fn in_bounds(self) -> bool {
        self.col >= 0
            && self.col < GRID_WIDTH as i8
            && self.row >= 0
            && self.row < GRID_HEIGHT as i8
    }
}

/// The seven piece kinds
///
/// Each kind has one fixed spawn layout. Only `I` carries a meaningful
/// orientation; the others rotate about their pivot block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    S,
    Z,
    L,
    J,
    Sqr,
    I,
    T,
}

impl PieceKind {
    /// All kinds, in randomizer index order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Sqr,
        PieceKind::I,
        PieceKind::T,
    ];

    /// Map a randomizer index in 0..7 to a kind
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use falltris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("SQR"), Some(PieceKind::Sqr));
    /// assert_eq!(PieceKind::from_str("o"), Some(PieceKind::Sqr));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "sqr" | "o" => Some(PieceKind::Sqr),
            "i" => Some(PieceKind::I),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::Sqr => "sqr",
            PieceKind::I => "i",
            PieceKind::T => "t",
        }
    }
}

/// Two-state orientation tracked per piece. Only the I piece toggles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Lateral move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta of a one-cell move
    pub fn delta(self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    /// The column a block must not occupy for the move to be legal
    pub fn boundary_col(self) -> i8 {
        match self {
            Direction::Left => 0,
            Direction::Right => GRID_WIDTH as i8 - 1,
        }
    }
}

/// Discrete player intents applied to the game state
///
/// The I/O layer translates key presses into these; the core never sees keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Rotate the active piece 90° clockwise
    RotateCw,
    /// Move the active piece one column left
    MoveLeft,
    /// Move the active piece one column right
    MoveRight,
    /// Fall at the soft drop threshold
    SoftDropOn,
    /// Fall at the base threshold again
    SoftDropOff,
    /// Toggle pause state
    TogglePause,
}

impl Intent {
    /// Parse intent from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use falltris_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("softdropon"), Some(Intent::SoftDropOn));
    /// assert_eq!(Intent::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotatecw" => Some(Intent::RotateCw),
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdropon" => Some(Intent::SoftDropOn),
            "softdropoff" => Some(Intent::SoftDropOff),
            "togglepause" => Some(Intent::TogglePause),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::RotateCw => "rotateCw",
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDropOn => "softDropOn",
            Intent::SoftDropOff => "softDropOff",
            Intent::TogglePause => "togglePause",
        }
    }

    /// Intents that move the active piece; rejected while paused
    pub fn moves_piece(&self) -> bool {
        matches!(self, Intent::RotateCw | Intent::MoveLeft | Intent::MoveRight)
    }
}

/// A cell of the authoritative grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Locked,
}

/// A cell as seen by a renderer: the grid plus the falling piece overlaid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewCell {
    #[default]
    Empty,
    Falling,
    Locked,
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub topped_out: bool,
}
