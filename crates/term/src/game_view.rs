//! GameView: draws a [`GameSnapshot`] into a framebuffer.
//!
//! Pure (no I/O). The same [`Layout`] drives drawing and hit-testing of the
//! on-screen button row, so a click always lands on what was drawn.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// On-screen controls, left to right
pub const BUTTONS: [(Command, char); 5] = [
    (Command::MoveLeft, '◀'),
    (Command::MoveRight, '▶'),
    (Command::RotateClockwise, '⟳'),
    (Command::SoftDrop, '▼'),
    (Command::HardDrop, '⤓'),
];

const BUTTON_W: u16 = 3;
const BUTTON_GAP: u16 = 1;
const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 12;

const WELL_BG: Rgb = Rgb::new(24, 24, 32);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const BUTTON: Style = Style::new(Rgb::WHITE, Rgb::new(60, 60, 80)).bold();
const OVERLAY: Style = Style::new(Rgb::WHITE, Rgb::BLACK).bold();

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

/// Screen positions of the view's parts for one viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the board frame
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub buttons_x: u16,
    pub buttons_y: u16,
    pub panel_x: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares a cell in common terminal fonts.
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

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let total_w = frame_w + PANEL_GAP + PANEL_W;
        // Board frame plus the button row underneath.
        let total_h = frame_h + 1;

        let frame_x = viewport.width.saturating_sub(total_w) / 2;
        let frame_y = viewport.height.saturating_sub(total_h) / 2;
        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            buttons_x: frame_x + frame_w.saturating_sub(buttons_width()) / 2,
            buttons_y: frame_y + frame_h,
            panel_x: frame_x + frame_w + PANEL_GAP,
        }
    }

    /// The command of the button under a terminal cell, if any
    pub fn button_at(&self, viewport: Viewport, column: u16, row: u16) -> Option<Command> {
        let layout = self.layout(viewport);
        if row != layout.buttons_y || column < layout.buttons_x {
            return None;
        }
        let offset = column - layout.buttons_x;
        let slot = offset / (BUTTON_W + BUTTON_GAP);
        if offset % (BUTTON_W + BUTTON_GAP) >= BUTTON_W {
            return None;
        }
        BUTTONS.get(slot as usize).map(|&(command, _)| command)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        paused: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default());
        let layout = self.layout(viewport);

        let well = Style::new(Rgb::new(70, 70, 80), WELL_BG).dim();
        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            well,
        );
        draw_border(fb, &layout);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                match PieceKind::from_code(code) {
                    Some(kind) => self.draw_block(fb, &layout, x as i8, y as i8, kind),
                    None => self.fill_cell(fb, &layout, x as u16, y as u16, '·', well),
                }
            }
        }

        for (x, y) in snap.active.cells() {
            self.draw_block(fb, &layout, x, y, snap.active.kind);
        }

        self.draw_buttons(fb, &layout);
        self.draw_panel(fb, snap, viewport, &layout);

        if snap.game_over {
            draw_overlay(fb, &layout, 0, "GAME OVER");
            let score = format!("SCORE {}", snap.score);
            draw_overlay(fb, &layout, 1, &score);
        } else if paused {
            draw_overlay(fb, &layout, 0, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, paused, viewport, &mut fb);
        fb
    }

    /// A settled or falling block; cells above the board are not drawn
    fn draw_block(&self, fb: &mut FrameBuffer, layout: &Layout, x: i8, y: i8, kind: PieceKind) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let style = Style::new(Rgb::from(kind.color()), WELL_BG).bold();
        self.fill_cell(fb, layout, x as u16, y as u16, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, layout: &Layout, x: u16, y: u16, ch: char, style: Style) {
        let px = layout.frame_x + 1 + x * self.cell_w;
        let py = layout.frame_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_buttons(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let mut x = layout.buttons_x;
        for &(_, icon) in BUTTONS.iter() {
            fb.fill_rect(x, layout.buttons_y, BUTTON_W, 1, ' ', BUTTON);
            fb.put_char(x + BUTTON_W / 2, layout.buttons_y, icon, BUTTON);
            x += BUTTON_W + BUTTON_GAP;
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: &Layout) {
        let x = layout.panel_x;
        if x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let mut y = layout.frame_y;
        for (label, value) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, label, LABEL);
            fb.put_number(x, y + 1, value, VALUE);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", LABEL);
        y += 1;
        let color = Style::new(Rgb::from(snap.next.color()), Rgb::BLACK).bold();
        for (dy, row) in snap.next_shape().iter().enumerate() {
            for (dx, &filled) in row.iter().enumerate() {
                if filled != 0 {
                    let px = x + dx as u16 * 2;
                    fb.put_str(px, y + dy as u16, "██", color);
                }
            }
        }
        y += 5;

        let hint = VALUE.dim();
        for line in ["p pause", "r restart", "q quit"] {
            fb.put_str(x, y, line, hint);
            y += 1;
        }
    }
}

fn buttons_width() -> u16 {
    BUTTONS.len() as u16 * BUTTON_W + (BUTTONS.len() as u16 - 1) * BUTTON_GAP
}

fn draw_border(fb: &mut FrameBuffer, layout: &Layout) {
    let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}

/// Centered text on the board, `line` rows below the middle
fn draw_overlay(fb: &mut FrameBuffer, layout: &Layout, line: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = layout.frame_x + layout.frame_w.saturating_sub(text_w) / 2;
    let y = layout.frame_y + layout.frame_h / 2 + line;
    fb.put_str(x, y, text, OVERLAY);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(60, 30)
    }

    #[test]
    fn layout_centers_the_board() {
        let layout = GameView::default().layout(viewport());
        assert_eq!(layout.frame_w, 22);
        assert_eq!(layout.frame_h, 22);
        assert_eq!(layout.frame_x, (60 - 36) / 2);
        assert_eq!(layout.frame_y, (30 - 23) / 2);
        assert_eq!(layout.buttons_y, layout.frame_y + 22);
    }

    #[test]
    fn buttons_hit_test_in_order() {
        let view = GameView::default();
        let layout = view.layout(viewport());
        for (i, &(command, _)) in BUTTONS.iter().enumerate() {
            let x = layout.buttons_x + i as u16 * (BUTTON_W + BUTTON_GAP);
            assert_eq!(view.button_at(viewport(), x, layout.buttons_y), Some(command));
            assert_eq!(view.button_at(viewport(), x + 2, layout.buttons_y), Some(command));
        }
        // Gap between buttons
        assert_eq!(view.button_at(viewport(), layout.buttons_x + 3, layout.buttons_y), None);
        // Past the last button
        assert_eq!(view.button_at(viewport(), layout.buttons_x + 19, layout.buttons_y), None);
        // Wrong row
        assert_eq!(view.button_at(viewport(), layout.buttons_x, layout.buttons_y - 1), None);
    }

    #[test]
    fn settled_cells_use_piece_colors() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = PieceKind::Z.code();
        let view = GameView::default();
        let fb = view.render(&snap, false, viewport());
        let layout = view.layout(viewport());

        let glyph = fb.get(layout.frame_x + 1, layout.frame_y + 20).unwrap_or_default();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, Rgb::new(0xf0, 0, 0));
    }

    #[test]
    fn panel_shows_score() {
        let snap = GameSnapshot { score: 1300, level: 3, ..Default::default() };
        let view = GameView::default();
        let fb = view.render(&snap, false, viewport());
        let layout = view.layout(viewport());
        assert!(fb.row_text(layout.frame_y).contains("SCORE"));
        assert!(fb.row_text(layout.frame_y + 1).contains("1300"));
        assert!(fb.row_text(layout.frame_y + 4).contains('3'));
    }

    #[test]
    fn overlays() {
        let view = GameView::default();
        let layout = view.layout(viewport());
        let mid = layout.frame_y + layout.frame_h / 2;

        let paused = view.render(&GameSnapshot::default(), true, viewport());
        assert!(paused.row_text(mid).contains("PAUSED"));

        let over = GameSnapshot { game_over: true, score: 700, ..Default::default() };
        let fb = view.render(&over, true, viewport());
        assert!(fb.row_text(mid).contains("GAME OVER"));
        assert!(fb.row_text(mid + 1).contains("SCORE 700"));
        assert!(!fb.row_text(mid).contains("PAUSED"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&GameSnapshot::default(), false, Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
