//! Game state module - manages the complete game state
//!
//! Ties together the grid, the active/next piece pair, the randomizer and the
//! speed counter. Handles intents (move, rotate, soft drop, pause), gravity
//! steps, locking, line clears and game over.
//!
//! Everything here is synchronous: one call is one intent or one frame.
//! Rejected transitions leave the state untouched and report `false`.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::PieceRandomizer;
use crate::rotation;
use crate::scoring::apply_line_clears;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Piece,
    next: Piece,
    randomizer: PieceRandomizer,
    score: u32,
    /// Frames per gravity step outside of soft drop; line clears lower it,
    /// a key release resets it
    base_threshold: u32,
    soft_drop: bool,
    /// Frames counted since the last gravity step
    timer: u32,
    paused: bool,
    game_over: bool,
    /// Last lock event (consumed by observers)
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Start a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let state = Self::with_randomizer(PieceRandomizer::new(seed));
        log::info!(
            "new game: seed={} active={} next={}",
            seed,
            state.active.kind.as_str(),
            state.next.kind.as_str()
        );
        state
    }

    fn with_randomizer(mut randomizer: PieceRandomizer) -> Self {
        let active = Piece::spawn(randomizer.draw());
        let next = Piece::spawn(randomizer.draw());

        Self {
            grid: Grid::new(),
            active,
            next,
            randomizer,
            score: 0,
            base_threshold: DEFAULT_SPEED_THRESHOLD,
            soft_drop: false,
            timer: 0,
            paused: false,
            game_over: false,
            last_event: None,
        }
    }

    /// Start over on an empty grid, continuing the same random stream
    pub fn restart(&mut self) {
        let randomizer = self.randomizer.clone();
        *self = Self::with_randomizer(randomizer);
        log::info!("game restarted");
    }

    /// Replace the grid (scenario setup)
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    /// Replace the active piece (scenario setup)
    pub fn with_active(mut self, piece: Piece) -> Self {
        self.active = piece;
        self
    }

    /// Replace the next piece (scenario setup)
    pub fn with_next(mut self, piece: Piece) -> Self {
        self.next = piece;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Effective frames per gravity step
    pub fn speed_threshold(&self) -> u32 {
        if self.soft_drop {
            SOFT_DROP_THRESHOLD
        } else {
            self.base_threshold
        }
    }

    /// Frames per gravity step outside of soft drop
    pub fn base_speed_threshold(&self) -> u32 {
        self.base_threshold
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Render view of one cell: the falling piece wins over the grid
    pub fn view_cell(&self, col: i8, row: i8) -> ViewCell {
        if self.active.covers(col, row) {
            return ViewCell::Falling;
        }
        match self.grid.get(col, row) {
            Some(Cell::Locked) => ViewCell::Locked,
            _ => ViewCell::Empty,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (row, line) in out.board.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = self.view_cell(col as i8, row as i8);
            }
        }
        out.active_kind = Some(self.active.kind);
        out.next = Some(self.next);
        out.score = self.score;
        out.speed_threshold = self.speed_threshold();
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.seed = self.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a player intent. Returns true if the state changed.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        if self.game_over || (self.paused && intent.moves_piece()) {
            log::trace!("intent {} ignored", intent.as_str());
            return false;
        }

        match intent {
            Intent::RotateCw => self.try_rotate(),
            Intent::MoveLeft => self.try_move(Direction::Left),
            Intent::MoveRight => self.try_move(Direction::Right),
            Intent::SoftDropOn => self.soft_drop_on(),
            Intent::SoftDropOff => self.soft_drop_off(),
            Intent::TogglePause => {
                self.paused = !self.paused;
                log::debug!("paused={}", self.paused);
                true
            }
        }
    }

    fn soft_drop_on(&mut self) -> bool {
        if self.soft_drop {
            return false;
        }
        self.soft_drop = true;
        true
    }

    /// Key release: leave soft drop and reset the speed to the default,
    /// dropping any line-clear speed-up
    fn soft_drop_off(&mut self) -> bool {
        let changed = self.soft_drop || self.base_threshold != DEFAULT_SPEED_THRESHOLD;
        self.soft_drop = false;
        self.base_threshold = DEFAULT_SPEED_THRESHOLD;
        changed
    }

    /// Check if the active piece can shift one column in `direction`
    pub fn can_move(&self, direction: Direction) -> bool {
        let boundary = direction.boundary_col();
        let dc = direction.delta();
        self.active
            .blocks
            .iter()
            .all(|p| p.col != boundary && !self.grid.is_locked(p.col + dc, p.row))
    }

    /// Shift the active piece one column. All four blocks move or none do.
    pub(crate) fn try_move(&mut self, direction: Direction) -> bool {
        if !self.can_move(direction) {
            return false;
        }
        self.active = self.active.shifted(direction.delta(), 0);
        true
    }

    /// Rotate the active piece clockwise if the rotated layout is valid
    pub(crate) fn try_rotate(&mut self) -> bool {
        match rotation::try_rotate(&self.active, &self.grid) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => false,
        }
    }

    /// Advance simulated time by one frame
    ///
    /// Runs a gravity step once the frame counter exceeds the speed
    /// threshold, then resets the counter. Returns true if a step ran.
    ///
    /// Paused and finished games do not count frames at all, so unpausing
    /// never triggers an immediate step.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        if self.timer > self.speed_threshold() {
            self.timer = 0;
            self.step()
        } else {
            self.timer += 1;
            false
        }
    }

    /// Run one gravity step immediately: fall one row, or lock if grounded
    pub fn step(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        if self.active.is_grounded(&self.grid) {
            self.lock_active();
        } else {
            self.active = self.active.shifted(0, 1);
        }
        true
    }

    /// Lock the active piece, clear lines, promote the next piece
    fn lock_active(&mut self) {
        let locked = self.active;
        self.grid.lock(locked.positions());

        let lines = self.grid.clear_full_rows() as u32;
        if lines > 0 {
            let result = apply_line_clears(self.score, self.base_threshold, lines);
            self.score = result.score;
            self.base_threshold = result.speed_threshold;
            log::debug!(
                "cleared {} line(s): score={} threshold={}",
                lines,
                self.score,
                self.base_threshold
            );
        }

        self.active = self.next;
        self.next = Piece::spawn(self.randomizer.draw());

        let topped_out = self.grid.top_row_occupied() || !self.active.fits(&self.grid);
        if topped_out {
            self.game_over = true;
            log::info!("game over: score={}", self.score);
        }

        log::debug!(
            "locked {} piece, next={}",
            locked.kind.as_str(),
            self.next.kind.as_str()
        );

        self.last_event = Some(LockEvent {
            kind: locked.kind,
            lines_cleared: lines,
            topped_out,
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
