//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, ViewCell, GRID_HEIGHT, GRID_WIDTH};

/// Help lines shown under the side panel
const INSTRUCTIONS: [&str; 6] = [
    "UP     rotate",
    "DOWN   drop faster",
    "LEFT/RIGHT  move",
    "P      pause",
    "R      restart",
    "Q/ESC  quit",
];

/// Side panel needs at least this many columns to be drawn at all
const MIN_PANEL_W: u16 = 12;

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 cells look roughly square in most terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered playfield in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (GRID_WIDTH as u16).saturating_mul(self.cell_w).saturating_add(2),
            (GRID_HEIGHT as u16).saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let falling_kind = snap.active_kind.unwrap_or(PieceKind::T);
        for (y, line) in snap.board.iter().enumerate() {
            for (x, cell) in line.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match cell {
                    ViewCell::Empty => self.draw_empty_cell(fb, start_x, start_y, x, y),
                    ViewCell::Locked => self.fill_cell_rect(
                        fb,
                        start_x,
                        start_y,
                        x,
                        y,
                        '█',
                        CellStyle::new(Rgb::new(150, 150, 170), PLAYFIELD_BG),
                    ),
                    ViewCell::Falling => self.fill_cell_rect(
                        fb,
                        start_x,
                        start_y,
                        x,
                        y,
                        '█',
                        CellStyle::new(piece_color(falling_kind), PLAYFIELD_BG).bold(),
                    ),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        // Game over wins over pause.
        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if snap.paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        fb.put_char(x, y, '┌', style);
        let right = x.saturating_add(w.saturating_sub(1));
        let bottom = y.saturating_add(h.saturating_sub(1));
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        // Cells past the framebuffer edge are dropped by put_char
        for dx in 1..w.saturating_sub(1).min(fb.width()) {
            fb.put_char(x.saturating_add(dx), y, '─', style);
            fb.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..h.saturating_sub(1).min(fb.height()) {
            fb.put_char(x, y.saturating_add(dy), '│', style);
            fb.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x
            .saturating_add(1)
            .saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_W {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.speed_threshold, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(next) = snap.next {
            y = self.draw_preview(fb, &next, panel_x, y);
        }
        y = y.saturating_add(1);

        let help = value.dim();
        for line in INSTRUCTIONS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    /// Draw a piece in its own bounding box; returns the row below it
    fn draw_preview(&self, fb: &mut FrameBuffer, piece: &Piece, x: u16, y: u16) -> u16 {
        let min_col = piece.blocks.iter().map(|p| p.col).min().unwrap_or(0);
        let min_row = piece.blocks.iter().map(|p| p.row).min().unwrap_or(0);
        let max_row = piece.blocks.iter().map(|p| p.row).max().unwrap_or(0);

        let style = CellStyle::new(piece_color(piece.kind), PANEL_BG).bold();
        for p in &piece.blocks {
            let px = x.saturating_add(((p.col - min_col) as u16).saturating_mul(self.cell_w));
            let py = y.saturating_add(((p.row - min_row) as u16).saturating_mul(self.cell_h));
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
        y.saturating_add(((max_row - min_row) as u16 + 1).saturating_mul(self.cell_h))
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::Sqr => Rgb::new(240, 220, 80),
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::T => Rgb::new(200, 120, 220),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_matches_grid() {
        assert_eq!(GameView::default().frame_size(), (26, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (14, 22));
    }

    #[test]
    fn huge_cells_saturate_instead_of_overflowing() {
        let view = GameView::new(6000, 1);
        assert_eq!(view.frame_size(), (u16::MAX, 22));

        let snap = crate::core::GameState::new(1).snapshot();
        let fb = view.render(&snap, Viewport::new(80, 24));
        assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    }

    #[test]
    fn preview_of_i_piece_is_one_row() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(10, 3);
        let below = view.draw_preview(&mut fb, &Piece::spawn(PieceKind::I), 0, 0);
        assert_eq!(below, 1);
        assert_eq!(fb.row_text(0), "████████  ");
    }
}
