//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure: no I/O, so every layout decision can be asserted in tests.

use crate::core::{GameSnapshot, Matrix};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Color, GRID_HEIGHT, GRID_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const EMPTY: Glyph = Glyph::new('·', Style::new(Rgb::new(70, 70, 85), WELL_BG));
const BLOCK: char = '█';

/// Columns the side panel needs to fit the labels and a 4-wide preview.
const PANEL_MIN_WIDTH: u16 = 10;
/// Gap between the board frame and the side panel.
const PANEL_GAP: u16 = 2;

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

/// Shell state the snapshot does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlay {
    pub paused: bool,
}

/// Where things go for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the board frame.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Left column of the side panel, if it fits.
    pub panel_x: Option<u16>,
}

impl Layout {
    /// Terminal position of board cell `(x, y)`.
    fn cell_origin(&self, view: &GameView, x: i32, y: i32) -> (u16, u16) {
        (
            self.frame_x + 1 + x as u16 * view.cell_w,
            self.frame_y + 1 + y as u16 * view.cell_h,
        )
    }
}

/// Board, side panel and banners for one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    /// Terminal rows per board cell.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square in most fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Board frame centered in the viewport, panel to its right.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = GRID_WIDTH as u16 * self.cell_w + 2;
        let frame_h = GRID_HEIGHT as u16 * self.cell_h + 2;
        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;

        let panel_x = frame_x + frame_w + PANEL_GAP;
        let panel_fits = viewport.width.saturating_sub(panel_x) >= PANEL_MIN_WIDTH;

        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel_x: panel_fits.then_some(panel_x),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        overlay: Overlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);
        let layout = self.layout(viewport);

        draw_frame(fb, &layout);
        self.draw_well(fb, &layout, snap);
        if let Some(panel_x) = layout.panel_x {
            self.draw_panel(fb, panel_x, layout.frame_y, snap);
        }

        let banner = if snap.game_over {
            Some("GAME OVER")
        } else if overlay.paused {
            Some("PAUSED")
        } else {
            None
        };
        if let Some(text) = banner {
            draw_banner(fb, &layout, text);
        }
    }

    /// Allocating variant of [`render_into`](Self::render_into).
    pub fn render(&self, snap: &GameSnapshot, overlay: Overlay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let (px, py) = layout.cell_origin(self, x, y);
                let glyph = match snap.cell_at(x, y) {
                    Some(color) => block(color, WELL_BG),
                    None => EMPTY,
                };
                fb.fill(px, py, self.cell_w, self.cell_h, glyph);
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, x: u16, top: u16, snap: &GameSnapshot) {
        fb.text(x, top, "SCORE", Style::LABEL);
        fb.number(x, top + 1, snap.score, Style::FRAME);

        fb.text(x, top + 3, "LINES", Style::LABEL);
        fb.number(x, top + 4, snap.lines, Style::FRAME);

        fb.text(x, top + 6, "NEXT", Style::LABEL);
        self.draw_preview(fb, x, top + 7, &snap.next.matrix, snap.next.color);
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, matrix: &Matrix, color: Color) {
        let glyph = block(color, Rgb::default());
        for (dx, dy) in matrix.occupied() {
            fb.fill(
                x + dx as u16 * self.cell_w,
                y + dy as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                glyph,
            );
        }
    }
}

fn block(color: Color, bg: Rgb) -> Glyph {
    Glyph::new(BLOCK, Style::new(color.into(), bg).bold())
}

fn draw_frame(fb: &mut FrameBuffer, layout: &Layout) {
    let (x0, y0) = (layout.frame_x, layout.frame_y);
    let (x1, y1) = (x0 + layout.frame_w - 1, y0 + layout.frame_h - 1);
    let glyph = |ch| Glyph::new(ch, Style::FRAME);

    fb.fill(x0 + 1, y0, layout.frame_w - 2, 1, glyph('─'));
    fb.fill(x0 + 1, y1, layout.frame_w - 2, 1, glyph('─'));
    fb.fill(x0, y0 + 1, 1, layout.frame_h - 2, glyph('│'));
    fb.fill(x1, y0 + 1, 1, layout.frame_h - 2, glyph('│'));

    fb.set(x0, y0, glyph('┌'));
    fb.set(x1, y0, glyph('┐'));
    fb.set(x0, y1, glyph('└'));
    fb.set(x1, y1, glyph('┘'));
}

/// One line of text centered over the middle row of the board.
fn draw_banner(fb: &mut FrameBuffer, layout: &Layout, text: &str) {
    let width = text.chars().count() as u16;
    let x = layout.frame_x + layout.frame_w.saturating_sub(width) / 2;
    let y = layout.frame_y + layout.frame_h / 2;
    let style = Style::new(Rgb::new(255, 255, 255), Rgb::default()).bold();
    fb.text(x, y, text, style);
}
