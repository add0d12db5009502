//! Grid tests - occupancy, locking and row compaction

use falltris::core::Grid;
use falltris::types::{Cell, Position, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);
    assert_eq!(grid.locked_count(), 0);
    assert!(!grid.top_row_occupied());
    assert!(grid.full_rows().is_empty());
}

#[test]
fn test_out_of_bounds_reads_and_writes() {
    let mut grid = Grid::new();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(12, 0), None);
    assert_eq!(grid.get(0, 20), None);
    assert!(!grid.set(12, 5, Cell::Locked));
    assert!(!grid.is_locked(-1, 5));
    assert!(!grid.is_free(Position::new(0, -1)));
}

#[test]
fn test_lock_skips_positions_outside_the_grid() {
    let mut grid = Grid::new();
    grid.lock(&[
        Position::new(0, 0),
        Position::new(0, -1),
        Position::new(11, 19),
        Position::new(12, 19),
    ]);
    assert_eq!(grid.locked_count(), 2);
    assert!(grid.is_locked(0, 0));
    assert!(grid.is_locked(11, 19));
}

#[test]
fn test_clear_single_bottom_row() {
    let mut grid = Grid::new();
    grid.fill_row(19);
    grid.set(3, 18, Cell::Locked);

    assert_eq!(grid.clear_full_rows(), 1);

    assert!(grid.is_locked(3, 19));
    assert!(!grid.is_locked(3, 18));
    assert_eq!(grid.locked_count(), 1);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut grid = Grid::new();
    grid.set(0, 16, Cell::Locked);
    grid.fill_row(17);
    grid.set(0, 18, Cell::Locked);
    grid.fill_row(19);

    assert_eq!(grid.full_rows().as_slice(), &[17, 19]);
    assert_eq!(grid.clear_full_rows(), 2);

    // Both markers slide down to the floor, in order
    assert!(grid.is_locked(0, 18));
    assert!(grid.is_locked(0, 19));
    assert_eq!(grid.locked_count(), 2);
    assert!(grid.full_rows().is_empty());
}

#[test]
fn test_clear_stacked_rows_with_overhang() {
    let mut grid = Grid::new();
    for row in 15..20 {
        grid.fill_row(row);
    }
    grid.set(7, 14, Cell::Locked);

    assert_eq!(grid.clear_full_rows(), 5);
    assert_eq!(grid.locked_count(), 1);
    assert!(grid.is_locked(7, 19));
}

#[test]
fn test_clear_top_row_leaves_it_empty() {
    let mut grid = Grid::new();
    grid.fill_row(0);
    assert!(grid.top_row_occupied());

    assert_eq!(grid.clear_full_rows(), 1);
    assert!(!grid.top_row_occupied());
    assert_eq!(grid.locked_count(), 0);
}

#[test]
fn test_partial_row_is_not_cleared() {
    let mut grid = Grid::new();
    grid.fill_row(19);
    grid.set(6, 19, Cell::Empty);

    assert!(!grid.is_row_full(19));
    assert_eq!(grid.clear_full_rows(), 0);
    assert_eq!(grid.locked_count(), GRID_WIDTH as usize - 1);
}

#[test]
fn test_display_marks_locked_cells() {
    let mut grid = Grid::new();
    grid.set(0, 19, Cell::Locked);
    grid.set(11, 19, Cell::Locked);

    let text = grid.to_string();
    let last = text.lines().last().unwrap();
    assert_eq!(last, "#..........#");
    assert_eq!(text.lines().count(), GRID_HEIGHT as usize);
}
