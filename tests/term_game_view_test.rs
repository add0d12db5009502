use falltris::core::{GameState, Piece};
use falltris::term::{AnchorY, GameView, Viewport};
use falltris::types::{PieceKind, ViewCell};

fn contains_text(fb: &falltris::term::FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 12 cells * 2 columns + border => 26 wide, 20 rows + border => 22 tall
    let fb = view.render(&snap, Viewport::new(26, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(25, 21).unwrap().ch, '┘');
    assert_eq!(fb.get(1, 19).unwrap().ch, '·');
}

#[test]
fn term_view_renders_locked_cell_two_columns_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = ViewCell::Locked;

    let fb = GameView::default().render(&snap, Viewport::new(26, 22));

    // Inside the border the origin is (1, 1)
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_falling_piece() {
    let state = GameState::new(1).with_active(Piece::spawn(PieceKind::I));
    let fb = GameView::new(1, 1).render(&state.snapshot(), Viewport::new(14, 22));

    // I piece spans columns 4..=7 on row 1
    assert_eq!(fb.row_text(2), "│····████····│");
}

#[test]
fn term_view_overlays_pause_and_game_over() {
    let view = GameView::default();
    let mut snap = GameState::new(1).snapshot();
    snap.paused = true;
    let fb = view.render(&snap, Viewport::new(26, 22));
    assert!(fb.row_text(11).contains("PAUSED"));

    snap.game_over = true;
    let fb = view.render(&snap, Viewport::new(26, 22));
    assert!(fb.row_text(11).contains("GAME OVER"));
    assert!(!contains_text(&fb, "PAUSED"));
}

#[test]
fn term_view_side_panel_shows_score_speed_and_help() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 42;
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(70, 24));

    assert!(fb.row_text(0).contains("LINES"));
    assert!(fb.row_text(1).contains("42"));
    assert!(fb.row_text(3).contains("SPEED"));
    assert!(fb.row_text(4).contains("20"));
    assert!(fb.row_text(6).contains("NEXT"));
    assert!(contains_text(&fb, "rotate"));
    assert!(contains_text(&fb, "quit"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(30, 22));
    assert!(!contains_text(&fb, "LINES"));
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(26, 22));

    view.render_into(&snap, Viewport::new(80, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 30));
    // Centered: (80 - 26) / 2 = 27, (30 - 22) / 2 = 4
    assert_eq!(fb.get(27, 4).unwrap().ch, '┌');
}
