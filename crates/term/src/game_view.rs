//! GameView: maps a `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::BoardSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, WIN_TILE};

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

/// Data shown next to the board that does not come from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelInfo<'a> {
    pub player: &'a str,
    /// Best recorded score for `player`, if any.
    pub best: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Gutter between tiles and around the grid, in terminal cells.
const GAP: u16 = 1;

const FRAME_BG: Rgb = Rgb::new(0, 0, 0);
const EMPTY_TILE: Rgb = Rgb::new(130, 130, 130);
const TILE_TEXT: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 keeps tiles roughly square with typical glyph aspect ratios and
        // fits six-digit values.
        Self {
            cell_w: 6,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
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

    /// Outer size (border included) of the board frame for an `n x n` board.
    ///
    /// Saturates at `u16::MAX` for boards too large for any terminal.
    pub fn frame_size(&self, n: usize) -> (u16, u16) {
        let n = u16::try_from(n).unwrap_or(u16::MAX);
        let span = |cell: u16| {
            n.saturating_mul(cell)
                .saturating_add(n.saturating_add(1).saturating_mul(GAP))
                .saturating_add(2)
        };
        (span(self.cell_w), span(self.cell_h))
    }

    /// Top-left terminal cell of tile (row, col), relative to the frame origin.
    pub fn tile_origin(&self, row: usize, col: usize) -> (u16, u16) {
        let offset = |i: usize, cell: u16| {
            u16::try_from(i)
                .unwrap_or(u16::MAX)
                .saturating_mul(cell.saturating_add(GAP))
                .saturating_add(1 + GAP)
        };
        (offset(col, self.cell_w), offset(row, self.cell_h))
    }

    /// Render the board into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        panel: Option<&PanelInfo<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap.size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), FRAME_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, line) in snap.rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                let (dx, dy) = self.tile_origin(row, col);
                let (x, y) = (start_x.saturating_add(dx), start_y.saturating_add(dy));
                if x >= viewport.width || y >= viewport.height {
                    continue;
                }
                self.draw_tile(fb, x, y, value);
            }
        }

        self.draw_side_panel(fb, snap, panel, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            let hint_y = start_y.saturating_add(frame_h / 2).saturating_add(1);
            let hint = "r restart  q quit";
            let hint_w = hint.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(hint_w) / 2);
            fb.put_str(x, hint_y, hint, CellStyle::new(Rgb::new(220, 220, 220), FRAME_BG));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, None, viewport, &mut fb);
        fb
    }

    pub fn render_with_panel(
        &self,
        snap: &BoardSnapshot,
        panel: &PanelInfo<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, Some(panel), viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: Cell) {
        let bg = tile_color(value);
        let style = CellStyle::new(TILE_TEXT, bg).bold();
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
        if value == 0 {
            return;
        }

        let label = tile_label(value, self.cell_w as usize);
        let label_w = label.chars().count() as u16;
        let lx = x.saturating_add(self.cell_w.saturating_sub(label_w) / 2);
        let ly = y.saturating_add(self.cell_h / 2);
        fb.put_str(lx, ly, &label, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        panel: Option<&PanelInfo<'_>>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), FRAME_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), FRAME_BG);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MAX", label);
        if snap.max_tile() >= WIN_TILE {
            let win = CellStyle::new(Rgb::new(237, 194, 46), FRAME_BG).bold();
            fb.put_str(panel_x.saturating_add(4), y, "WIN", win);
        }
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.max_tile(), value);
        y = y.saturating_add(2);

        if let Some(info) = panel {
            fb.put_str(panel_x, y, "BEST", label);
            y = y.saturating_add(1);
            let best = info.best.unwrap_or(0).max(snap.score);
            fb.put_u64(panel_x, y, best, value);
            y = y.saturating_add(2);

            fb.put_str(panel_x, y, "PLAYER", label);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, info.player, value);
            y = y.saturating_add(2);
        }

        for line in ["arrows/wasd move", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
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
        let style = CellStyle::new(Rgb::new(255, 0, 0), FRAME_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Background color for a tile value (0 means empty).
pub fn tile_color(value: Cell) -> Rgb {
    match value {
        0 => EMPTY_TILE,
        2 => Rgb::new(255, 255, 255),
        4 => Rgb::new(255, 255, 128),
        8 => Rgb::new(255, 255, 0),
        16 => Rgb::new(255, 200, 55),
        32 => Rgb::new(200, 200, 200),
        64 => Rgb::new(140, 100, 200),
        128 => Rgb::new(175, 100, 40),
        256 => Rgb::new(51, 250, 40),
        512 => Rgb::new(240, 150, 50),
        1024 => Rgb::new(240, 100, 50),
        2048 => Rgb::new(240, 50, 50),
        v => {
            let c = v.min(255) as u8;
            Rgb::new(255 - c, 255 - c / 2, 200)
        }
    }
}

/// Text for a tile no wider than `max_w`, shortening with `k`/`M` suffixes.
///
/// Tiles are powers of two, so values of 1024 and up divide exactly.
pub fn tile_label(value: Cell, max_w: usize) -> ArrayString<24> {
    let mut out = ArrayString::<24>::new();
    let _ = write!(out, "{}", value);
    if out.len() <= max_w {
        return out;
    }

    for (unit, suffix) in [(1u64 << 10, 'k'), (1u64 << 20, 'M'), (1u64 << 30, 'G')] {
        if value < unit {
            break;
        }
        out.clear();
        let _ = write!(out, "{}{}", value / unit, suffix);
        if out.len() <= max_w {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_fit_or_shorten() {
        assert_eq!(tile_label(2, 6).as_str(), "2");
        assert_eq!(tile_label(131072, 6).as_str(), "131072");
        assert_eq!(tile_label(1 << 20, 6).as_str(), "1024k");
        assert_eq!(tile_label(2048, 3).as_str(), "2k");
        assert_eq!(tile_label(1 << 30, 4).as_str(), "1G");
    }

    #[test]
    fn palette_has_fallback_beyond_2048() {
        assert_eq!(tile_color(0), EMPTY_TILE);
        assert_eq!(tile_color(2048), Rgb::new(240, 50, 50));
        assert_eq!(tile_color(4096), Rgb::new(0, 128, 200));
    }

    #[test]
    fn frame_size_counts_gutters_and_border() {
        let view = GameView::default();
        // 4 tiles * 6 + 5 gutters + 2 border = 31; 4 * 3 + 5 + 2 = 19.
        assert_eq!(view.frame_size(4), (31, 19));
        assert_eq!(view.frame_size(2), (17, 11));
        assert_eq!(view.tile_origin(0, 0), (2, 2));
        assert_eq!(view.tile_origin(1, 2), (16, 6));
    }

    #[test]
    fn huge_boards_saturate_instead_of_overflowing() {
        let view = GameView::default();
        assert_eq!(view.frame_size(20_000), (u16::MAX, u16::MAX));
        assert_eq!(view.frame_size(usize::MAX), (u16::MAX, u16::MAX));
        assert_eq!(view.tile_origin(usize::MAX, 20_000), (u16::MAX, u16::MAX));

        let snap = BoardSnapshot {
            size: 20_000,
            rows: vec![vec![2; 3]; 3],
            score: 0,
            game_over: true,
        };
        let fb = view.render(&snap, Viewport::new(80, 24));
        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(4, 3).map(|c| c.ch), Some('2'));
    }

    #[test]
    fn side_panel_marks_a_win() {
        let mut snap = BoardSnapshot {
            size: 2,
            rows: vec![vec![1024, 0], vec![0, 0]],
            score: 0,
            game_over: false,
        };
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, Viewport::new(50, 11));
        assert!((0..fb.height()).all(|y| !fb.row_text(y).contains("WIN")));

        snap.rows[0][0] = WIN_TILE;
        let fb = view.render(&snap, Viewport::new(50, 11));
        assert!(fb.row_text(3).contains("MAX WIN"));
    }
}
