//! Rotation module - candidate rotation and validated commit
//!
//! Every kind except I turns 90° clockwise about its pivot using the integer
//! screen-space rotation `(dx, dy) -> (-dy, dx)` (rows grow downward).
//! The I piece toggles between two fixed layouts around its pivot instead.
//!
//! A candidate is committed only if all three non-pivot blocks land inside
//! the grid on empty cells. Otherwise the piece comes back unchanged.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::{Orientation, PieceKind, Position};

/// Pivot column and row that block non-I rotation outright
const PIVOT_GUARD: i8 = 1;

/// Rotate a block offset 90° clockwise in screen coordinates
#[inline]
pub fn rotate_offset(dx: i8, dy: i8) -> (i8, i8) {
    (-dy, dx)
}

/// Compute the rotated layout without validating it
///
/// Returns None when the pivot guard rejects the rotation before any cell
/// is looked at.
pub fn rotation_candidate(piece: &Piece) -> Option<Piece> {
    let pivot = piece.pivot();
    match piece.kind {
        PieceKind::I => Some(i_candidate(piece)),
        _ => {
            if pivot.col == PIVOT_GUARD || pivot.row == PIVOT_GUARD {
                return None;
            }
            let mut out = *piece;
            for block in &mut out.blocks[1..] {
                let (dx, dy) = rotate_offset(block.col - pivot.col, block.row - pivot.row);
                *block = pivot.offset(dx, dy);
            }
            Some(out)
        }
    }
}

/// I piece: direct assignment of the three non-pivot blocks
fn i_candidate(piece: &Piece) -> Piece {
    let a = piece.pivot();
    let [b, c, d] = match piece.orientation {
        Orientation::Horizontal => [a.offset(0, -1), a.offset(0, 1), a.offset(0, 2)],
        Orientation::Vertical => [a.offset(-1, 0), a.offset(1, 0), a.offset(2, 0)],
    };
    Piece {
        blocks: [a, b, c, d],
        orientation: piece.orientation.toggled(),
        ..*piece
    }
}

/// Check that every non-pivot block of a candidate is in bounds and not locked
fn candidate_fits(candidate: &Piece, grid: &Grid) -> bool {
    candidate.blocks[1..]
        .iter()
        .all(|&p: &Position| p.in_bounds() && !grid.is_locked(p.col, p.row))
}

/// Try to rotate a piece clockwise
///
/// Returns Some(rotated) if the candidate is valid, None if the piece must
/// stay as it is.
pub fn try_rotate(piece: &Piece, grid: &Grid) -> Option<Piece> {
    rotation_candidate(piece).filter(|candidate| candidate_fits(candidate, grid))
}

/// Rotate a piece clockwise, or return it unchanged if the rotation is invalid
pub fn rotate(piece: &Piece, grid: &Grid) -> Piece {
    try_rotate(piece, grid).unwrap_or(*piece)
}
