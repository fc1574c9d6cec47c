//! GameView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, PATTERN_SIZE, VISIBLE_HEIGHT};

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

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const HEADROOM_BG: Rgb = Rgb::new(18, 18, 24);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Colour of a board cell value; `None` for empty.
pub fn cell_color(value: i8) -> Option<Rgb> {
    match value {
        1 => Some(Rgb::new(220, 60, 60)),   // red
        2 => Some(Rgb::new(80, 200, 90)),   // green
        3 => Some(Rgb::new(70, 110, 230)),  // blue
        4 => Some(Rgb::new(240, 220, 70)),  // yellow
        5 => Some(Rgb::new(80, 220, 220)),  // cyan
        6 => Some(Rgb::new(210, 90, 210)),  // magenta
        7 => Some(Rgb::new(255, 128, 0)),   // orange
        -1 => Some(Rgb::new(255, 255, 255)), // marked for clear
        _ => None,
    }
}

/// Board drawn with each cell `cell_w` columns wide, plus a side panel.
pub struct GameView {
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares the glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `status` is a short line shown under the score (e.g. the last event).
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::plain(Rgb::new(220, 220, 220), SCREEN_BG));

        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let left = viewport.width.saturating_sub(frame_w + 16) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, left, top, frame_w, frame_h);

        for y in 0..BOARD_HEIGHT {
            // Row 23 is the top line of the frame.
            let sy = top + 1 + (BOARD_HEIGHT - 1 - y) as u16;
            let bg = if y >= VISIBLE_HEIGHT { HEADROOM_BG } else { FIELD_BG };
            for x in 0..BOARD_WIDTH {
                let sx = left + 1 + x as u16 * self.cell_w;
                match cell_color(snap.cell(x, y)) {
                    Some(fg) => {
                        let style = Style::plain(fg, bg);
                        let style = if y >= VISIBLE_HEIGHT { style.dim() } else { style };
                        fb.fill_rect(sx, sy, self.cell_w, 1, '█', style);
                    }
                    None => {
                        let style = Style::plain(Rgb::new(90, 90, 100), bg).dim();
                        fb.fill_rect(sx, sy, self.cell_w, 1, ' ', style);
                        fb.put(sx, sy, '·', style);
                    }
                }
            }
        }

        self.draw_side_panel(fb, snap, status, left + frame_w + 2, top);

        if snap.game_over {
            let text = "GAME OVER";
            let x = left + frame_w.saturating_sub(text.len() as u16) / 2;
            let style = Style::plain(Rgb::new(255, 255, 255), SCREEN_BG).bold();
            fb.put_str(x, top + frame_h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, status: Option<&str>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        status: Option<&str>,
        x: u16,
        top: u16,
    ) {
        let label = Style::plain(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = Style::plain(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.put_str(x, top, "SCORE", label);
        put_number(fb, x, top + 1, snap.score, value);
        fb.put_str(x, top + 3, "ROWS", label);
        put_number(fb, x, top + 4, snap.rows_cleared, value);
        if let Some(status) = status {
            fb.put_str(x, top + 6, status, value.dim());
        }

        fb.put_str(x, top + 8, "NEXT", label);
        let fg = cell_color(snap.next_kind.id() as i8).unwrap_or(value.fg);
        let n = PATTERN_SIZE as usize;
        for j in 0..n {
            let sy = top + 9 + (n - 1 - j) as u16;
            for (i, column) in snap.next_pattern.iter().enumerate() {
                let sx = x + i as u16 * self.cell_w;
                if column[j] {
                    fb.fill_rect(sx, sy, self.cell_w, 1, '█', Style::plain(fg, SCREEN_BG));
                }
            }
        }

        let help = value.dim();
        fb.put_str(x, top + 15, "←/→ move", help);
        fb.put_str(x, top + 16, "↑ rotate", help);
        fb.put_str(x, top + 17, "↓ drop", help);
        fb.put_str(x, top + 18, "r restart", help);
        fb.put_str(x, top + 19, "q quit", help);
    }
}

/// Draw `n` in decimal starting at (x, y), without going through a `String`.
fn put_number(fb: &mut FrameBuffer, x: u16, y: u16, n: u32, style: Style) {
    let mut digits = [b'0'; 10];
    let mut len = 0;
    let mut rest = n;
    loop {
        digits[len] = b'0' + (rest % 10) as u8;
        len += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    for (i, &d) in digits[..len].iter().rev().enumerate() {
        fb.put(x.saturating_add(i as u16), y, char::from(d), style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::plain(Rgb::new(200, 200, 200), SCREEN_BG);
    fb.put(x, y, '┌', style);
    fb.put(x + w - 1, y, '┐', style);
    fb.put(x, y + h - 1, '└', style);
    fb.put(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put(x + dx, y, '─', style);
        fb.put(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, '│', style);
        fb.put(x + w - 1, y + dy, '│', style);
    }
}
