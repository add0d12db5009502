//! Pieces module - the four-block piece model and its spawn layouts
//!
//! A piece is four grid positions plus a kind tag. Block `a` (index 0) is the
//! pivot; every rotation is computed relative to it.

use crate::grid::Grid;
use crate::types::{Orientation, PieceKind, Position, SPAWN_PIVOT};

/// Offset of a single block relative to the spawn pivot (dc, dr)
pub type BlockOffset = (i8, i8);

/// Spawn layout of a piece - 4 block offsets, pivot first
pub type PieceLayout = [BlockOffset; 4];

/// Get the spawn layout for a piece kind, relative to [`SPAWN_PIVOT`]
pub fn spawn_layout(kind: PieceKind) -> PieceLayout {
    match kind {
        PieceKind::S => [(0, 0), (-1, 0), (-1, -1), (0, 1)],
        // Z pivots on its left half, one column left of the shared pivot
        PieceKind::Z => [(-1, 0), (0, 0), (0, -1), (-1, 1)],
        PieceKind::L => [(0, 0), (-1, 0), (1, 0), (1, -1)],
        PieceKind::J => [(0, 0), (-1, 0), (1, 0), (-1, -1)],
        PieceKind::Sqr => [(0, 0), (-1, 0), (0, -1), (-1, -1)],
        PieceKind::I => [(0, 0), (-1, 0), (1, 0), (2, 0)],
        PieceKind::T => [(0, 0), (-1, 0), (1, 0), (0, -1)],
    }
}

/// A piece on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Block positions; index 0 is the pivot
    pub blocks: [Position; 4],
    /// Only meaningful for [`PieceKind::I`]
    pub orientation: Orientation,
}

impl Piece {
    /// Create a piece of the given kind in its canonical spawn layout
    pub fn spawn(kind: PieceKind) -> Self {
        let layout = spawn_layout(kind);
        Self {
            kind,
            blocks: layout.map(|(dc, dr)| SPAWN_PIVOT.offset(dc, dr)),
            orientation: Orientation::Horizontal,
        }
    }

    /// The block all rotations are computed around
    pub fn pivot(&self) -> Position {
        self.blocks[0]
    }

    pub fn positions(&self) -> &[Position; 4] {
        &self.blocks
    }

    /// Check if a cell is covered by this piece
    pub fn covers(&self, col: i8, row: i8) -> bool {
        self.blocks.contains(&Position::new(col, row))
    }

    /// The same piece translated by (dc, dr)
    pub fn shifted(&self, dc: i8, dr: i8) -> Self {
        Self {
            blocks: self.blocks.map(|p| p.offset(dc, dr)),
            ..*self
        }
    }

    /// Check if all blocks are inside the grid on empty cells
    pub fn fits(&self, grid: &Grid) -> bool {
        self.blocks.iter().all(|&p| grid.is_free(p))
    }

    /// Check if the piece is resting on the floor or on a locked cell
    pub fn is_grounded(&self, grid: &Grid) -> bool {
        self.blocks
            .iter()
            .any(|p| p.row >= grid.height() as i8 - 1 || grid.is_locked(p.col, p.row + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_pivot_is_first_block() {
        for kind in PieceKind::ALL {
            let piece = Piece::spawn(kind);
            assert_eq!(piece.pivot(), piece.blocks[0]);
        }
    }

    #[test]
    fn test_spawn_layouts_are_distinct_and_in_bounds() {
        for kind in PieceKind::ALL {
            let piece = Piece::spawn(kind);
            for (i, a) in piece.blocks.iter().enumerate() {
                assert!(a.in_bounds(), "{kind:?} block {i} out of bounds");
                for b in &piece.blocks[i + 1..] {
                    assert_ne!(a, b, "{kind:?} has duplicate blocks");
                }
            }
        }
    }

    #[test]
    fn test_shifted_keeps_kind_and_orientation() {
        let piece = Piece::spawn(PieceKind::T).shifted(2, 3);
        assert_eq!(piece.kind, PieceKind::T);
        assert_eq!(piece.orientation, Orientation::Horizontal);
        assert_eq!(piece.pivot(), Position::new(7, 4));
    }

    #[test]
    fn test_is_grounded_on_floor_and_on_stack() {
        let grid = Grid::new();
        let piece = Piece::spawn(PieceKind::I);
        assert!(!piece.is_grounded(&grid));
        assert!(piece.shifted(0, 18).is_grounded(&grid));

        let mut grid = Grid::new();
        grid.set(7, 2, Cell::Locked);
        assert!(piece.is_grounded(&grid));
    }
}
