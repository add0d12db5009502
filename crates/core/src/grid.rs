//! Grid module - the authoritative occupancy map
//!
//! The grid is 12 columns x 20 rows where each cell is either empty or locked.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (col, row) where col ranges 0..11 (left to right) and row
//! ranges 0..19 (top to bottom). Row 0 is the game-over row.
//!
//! The falling piece is never written here; renderers overlay it on demand.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Cell, Position, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Row indices returned by [`Grid::full_rows`]
pub type FullRows = ArrayVec<u8, { GRID_HEIGHT as usize }>;

/// The playfield - 12 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE],
        }
    }

    /// Calculate flat index from (col, row), None when out of bounds
    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if !Position::new(col, row).in_bounds() {
            return None;
        }
        Some((row as usize) * (GRID_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at (col, row). Returns None if out of bounds
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (col, row). Returns false if out of bounds
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> bool {
        match Self::index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Collision predicate: inside the grid and locked
    #[inline]
    pub fn is_locked(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(Cell::Locked))
    }

    /// Check a position is inside the grid and empty
    #[inline]
    pub fn is_free(&self, pos: Position) -> bool {
        matches!(self.get(pos.col, pos.row), Some(Cell::Empty))
    }

    /// Mark every position locked. Out-of-bounds positions are skipped.
    pub fn lock(&mut self, positions: &[Position; 4]) {
        for pos in positions {
            self.set(pos.col, pos.row, Cell::Locked);
        }
    }

    /// Check if a row is completely locked
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= GRID_HEIGHT as usize {
            return false;
        }
        let start = row * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end]
            .iter()
            .all(|cell| *cell == Cell::Locked)
    }

    /// Indices of all full rows, top to bottom
    pub fn full_rows(&self) -> FullRows {
        (0..GRID_HEIGHT)
            .filter(|&row| self.is_row_full(row as usize))
            .collect()
    }

    /// Overwrite `row` with the row above it, recursively up to row 0,
    /// then empty row 0
    fn collapse_row(&mut self, row: usize) {
        let width = GRID_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src = (r - 1) * width;
            self.cells.copy_within(src..src + width, r * width);
        }

        self.cells[..width].fill(Cell::Empty);
    }

    /// Clear all full rows and return how many were cleared
    ///
    /// Rows are scanned top-down and each full row is collapsed on its own.
    /// Collapsing only moves rows that were already scanned, so one pass
    /// finds every full row.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for row in 0..GRID_HEIGHT as usize {
            if self.is_row_full(row) {
                self.collapse_row(row);
                cleared += 1;
            }
        }
        cleared
    }

    /// Game-over predicate: any locked cell in row 0
    pub fn top_row_occupied(&self) -> bool {
        self.cells[..GRID_WIDTH as usize]
            .iter()
            .any(|cell| *cell == Cell::Locked)
    }

    /// Number of locked cells on the grid
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Locked).count()
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Lock every cell of a row (test and bench setup helper)
    pub fn fill_row(&mut self, row: i8) {
        for col in 0..GRID_WIDTH as i8 {
            self.set(col, row, Cell::Locked);
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per row: `#` locked, `.` empty
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(GRID_WIDTH as usize) {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Locked => '#',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
