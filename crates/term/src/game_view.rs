//! GameView: paints a session into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Every call repaints the whole frame: background, settled grid blocks, then
//! the active piece on top. Grid coordinates are scaled to terminal cells in a
//! single place ([`GameView::cell_origin`]); everything else draws in grid units.

use crate::core::{color_for, ActivePiece, Grid, Session, BACKGROUND, STROKE};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellValue, EMPTY};

/// Glyph filling a block
pub const BLOCK_GLYPH: char = '█';

/// Glyph for a block's last column; the uncovered sliver shows the stroke color
pub const STROKE_GLYPH: char = '▉';

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

/// Where the framed board lands in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Compute the framed board position for a grid in a viewport.
    pub fn layout(&self, grid: &Grid, viewport: Viewport) -> BoardLayout {
        let frame_w = grid.columns().saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = grid.rows().saturating_mul(self.cell_h).saturating_add(2);
        BoardLayout {
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully overwritten.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        let layout = self.render_board_into(session.grid(), Some(session.active()), viewport, fb);
        self.draw_side_panel(fb, session, viewport, &layout);
    }

    /// Render only the board: background, settled blocks, and an optional active piece.
    pub fn render_board_into(
        &self,
        grid: &Grid,
        active: Option<&ActivePiece>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> BoardLayout {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(grid, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        // Background for play area.
        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            CellStyle::new(BACKGROUND, BACKGROUND),
        );
        self.draw_border(fb, &layout, border);

        // Settled blocks.
        for (y, row) in grid.rows_iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                self.draw_block(fb, &layout, grid, x as i16, y as i16, value);
            }
        }

        // Active piece.
        if let Some(piece) = active {
            for (x, y, value) in piece.cells() {
                self.draw_block(fb, &layout, grid, x, y, value);
            }
        }

        layout
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    /// Terminal position of grid cell `(x, y)`'s top-left character.
    ///
    /// Returns `None` for cells outside the grid.
    pub fn cell_origin(&self, layout: &BoardLayout, grid: &Grid, x: i16, y: i16) -> Option<(u16, u16)> {
        if grid.is_out_of_bounds(x, y) {
            return None;
        }
        let px = layout.frame_x + 1 + (x as u16) * self.cell_w;
        let py = layout.frame_y + 1 + (y as u16) * self.cell_h;
        Some((px, py))
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        grid: &Grid,
        x: i16,
        y: i16,
        value: CellValue,
    ) {
        if value == EMPTY {
            return;
        }
        let (Some(color), Some((px, py))) = (color_for(value), self.cell_origin(layout, grid, x, y))
        else {
            return;
        };
        let style = CellStyle::new(color, STROKE);
        fb.fill_rect(px, py, self.cell_w - 1, self.cell_h, BLOCK_GLYPH, style);
        fb.fill_rect(px + self.cell_w - 1, py, 1, self.cell_h, STROKE_GLYPH, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &BoardLayout, style: CellStyle) {
        let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout
            .frame_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = layout.frame_y;
        for (name, n) in [
            ("SCORE", session.score() as u64),
            ("PIECES", session.pieces_spawned()),
            ("RESETS", session.board_resets()),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u64(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }
    }
}
