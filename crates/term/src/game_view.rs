//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (centred in the viewport):
//!
//! ```text
//! ┌────────────────────┐  SCORE
//! │ board 10x20 cells  │  LEVEL
//! │                    │  SPEED
//! │                    │  NEXT LEVEL IN
//! │                    │  NEXT (preview)
//! └────────────────────┘  MUSIC
//!
//!  <  rot  >  soft  drop
//!  new  pause  music
//! ```
//!
//! The same [`Layout`] drives rendering and pointer hit testing, so a click
//! always lands on what was drawn.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rect, Rgb};
use crate::types::{GameAction, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Side panel width in terminal columns.
pub const PANEL_W: u16 = 16;

/// Narrowest side panel still drawn.
const PANEL_MIN_W: u16 = 12;

/// On-screen control bar, one slice per row.
const CONTROL_ROWS: [&[(GameAction, &str)]; 2] = [
    &[
        (GameAction::MoveLeft, "<"),
        (GameAction::Rotate, "rot"),
        (GameAction::MoveRight, ">"),
        (GameAction::SoftDrop, "soft"),
        (GameAction::HardDrop, "drop"),
    ],
    &[
        (GameAction::Start, "new"),
        (GameAction::Pause, "pause"),
        (GameAction::ToggleMusic, "music"),
    ],
];

/// Total number of control buttons.
pub const CONTROL_COUNT: usize = 8;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// A clickable button of the control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlButton {
    pub action: GameAction,
    pub label: &'static str,
    pub rect: Rect,
}

/// Screen positions of everything drawn for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Board frame including its border.
    pub frame: Rect,
    /// `None` when the viewport is too narrow.
    pub panel: Option<Rect>,
    /// Buttons that fit inside the viewport; clipped ones are `None`.
    pub controls: [Option<ControlButton>; CONTROL_COUNT],
}

impl Layout {
    pub fn control_at(&self, col: u16, row: u16) -> Option<GameAction> {
        self.controls
            .iter()
            .flatten()
            .find(|b| b.rect.contains(col, row))
            .map(|b| b.action)
    }

    pub fn button(&self, action: GameAction) -> Option<ControlButton> {
        self.controls.iter().flatten().find(|b| b.action == action).copied()
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
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

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    /// Compute where the board, panel and buttons go.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let content_w = frame_w + 2 + PANEL_W;
        let content_h = frame_h + 1 + CONTROL_ROWS.len() as u16;

        let start_x = viewport.width.saturating_sub(content_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(content_h) / 2,
            AnchorY::Top => 0,
        };
        let frame = Rect::new(start_x, start_y, frame_w, frame_h);

        let panel_x = frame.right().saturating_add(2);
        let panel = if panel_x.saturating_add(PANEL_MIN_W) <= viewport.width {
            let w = PANEL_W.min(viewport.width - panel_x);
            Some(Rect::new(panel_x, start_y, w, frame_h))
        } else {
            None
        };

        let mut controls = [None; CONTROL_COUNT];
        let mut slot = 0;
        for (i, row) in CONTROL_ROWS.iter().enumerate() {
            let y = frame.bottom().saturating_add(1 + i as u16);
            let mut x = frame.x.saturating_add(1);
            for &(action, label) in row.iter() {
                let rect = Rect::new(x, y, label.len() as u16 + 2, 1);
                if rect.fits_in(viewport.width, viewport.height) {
                    controls[slot] = Some(ControlButton { action, label, rect });
                }
                slot += 1;
                x = rect.right().saturating_add(1);
            }
        }

        Layout {
            frame,
            panel,
            controls,
        }
    }

    /// Which control button (if any) is under a terminal cell.
    pub fn control_at(&self, viewport: Viewport, col: u16, row: u16) -> Option<GameAction> {
        self.layout(viewport).control_at(col, row)
    }

    /// Whether a terminal cell lies on the board frame (where overlays are drawn).
    pub fn overlay_hit(&self, viewport: Viewport, col: u16, row: u16) -> bool {
        self.layout(viewport).frame.contains(col, row)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let frame = layout.frame;

        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        // Background for play area.
        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', bg);

        // Border.
        self.draw_border(fb, frame, border);

        // Locked board cells.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                match snap.board[y as usize][x as usize] {
                    Some(kind) => self.draw_board_cell(fb, frame, x, y, kind),
                    None => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        // Active piece (rows above the top are hidden).
        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_board_cell(fb, frame, x as u16, y as u16, active.kind);
                }
            }
        }

        if let Some(panel) = layout.panel {
            self.draw_side_panel(fb, snap, panel);
        }

        self.draw_controls(fb, snap, &layout);

        // Overlays.
        match snap.status {
            GameStatus::Idle => {
                self.draw_overlay(fb, frame, &["BLOCKFALL", "", "ENTER OR CLICK", "TO START"])
            }
            GameStatus::Paused => self.draw_overlay(fb, frame, &["PAUSED", "", "P TO RESUME"]),
            GameStatus::GameOver => {
                self.draw_overlay(fb, frame, &["GAME OVER", "", "ENTER OR CLICK", "TO RESTART"])
            }
            GameStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, r: Rect, style: CellStyle) {
        if r.w < 2 || r.h < 2 {
            return;
        }
        let (x, y, w, h) = (r.x, r.y, r.w, r.h);

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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Rect, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Rect, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), BOARD_BG).bold();
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Rect,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, panel: Rect) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let dim = value.dim();
        let hud = snap.hud;
        let x = panel.x;

        let mut y = panel.y;
        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, hud.score, value);
        y += 3;

        fb.put_str(x, y, "LEVEL", label);
        fb.put_u32(x, y + 1, hud.level, value);
        y += 3;

        fb.put_str(x, y, "SPEED", label);
        let end = fb.put_str(x, y + 1, hud.speed_tier.label(), value);
        let end = fb.put_str(end + 1, y + 1, "(", dim);
        let end = fb.put_u32(end, y + 1, hud.speed_ms, dim);
        fb.put_str(end, y + 1, "ms)", dim);
        y += 3;

        fb.put_str(x, y, "NEXT LEVEL IN", label);
        let end = fb.put_u32(x, y + 1, hud.lines_to_next, value);
        fb.put_str(end + 1, y + 1, if hud.lines_to_next == 1 { "line" } else { "lines" }, dim);
        y += 3;

        fb.put_str(x, y, "NEXT", label);
        match snap.next {
            Some(kind) => {
                let style = CellStyle::new(piece_color(kind), SCREEN_BG).bold();
                for (dx, dy) in get_shape(kind).minos() {
                    let px = x + (dx as u16) * 2;
                    fb.put_str(px, y + 1 + dy as u16, "██", style);
                }
            }
            None => {
                fb.put_str(x, y + 1, "-", value);
            }
        }
        y += 4;

        fb.put_str(x, y, "MUSIC", label);
        fb.put_str(x, y + 1, if snap.music_on { "ON" } else { "OFF" }, value);
        y += 3;

        if y < panel.bottom() {
            let status = match snap.status {
                GameStatus::Idle => "READY",
                GameStatus::Running => "PLAYING",
                GameStatus::Paused => "PAUSED",
                GameStatus::GameOver => "GAME OVER",
            };
            fb.put_str(x, y, status, dim);
        }
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let idle = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(55, 60, 75));
        let pressed = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(96, 165, 250)).bold();

        for button in layout.controls.iter().flatten() {
            let on = match button.action {
                GameAction::Pause => snap.status == GameStatus::Paused,
                GameAction::ToggleMusic => snap.music_on,
                _ => false,
            };
            let style = if on { pressed } else { idle };
            let r = button.rect;
            fb.fill_rect(r.x, r.y, r.w, r.h, ' ', style);
            fb.put_str(r.x + 1, r.y, button.label, style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Rect, lines: &[&str]) {
        let inner_w = frame.w.saturating_sub(2);
        let block_h = lines.len() as u16 + 2;
        let top = frame.y + frame.h.saturating_sub(block_h) / 2;

        let shade = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG);
        fb.fill_rect(frame.x + 1, top, inner_w, block_h, ' ', shade);

        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = frame.x + 1 + inner_w.saturating_sub(text_w) / 2;
            let style = if i == 0 { shade.bold() } else { shade };
            fb.put_str(x, top + 1 + i as u16, text, style);
        }
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(96, 165, 250),
        PieceKind::J => Rgb::new(192, 132, 252),
        PieceKind::L => Rgb::new(245, 158, 11),
        PieceKind::O => Rgb::new(253, 224, 71),
        PieceKind::S => Rgb::new(52, 211, 153),
        PieceKind::T => Rgb::new(244, 114, 182),
        PieceKind::Z => Rgb::new(239, 68, 68),
    }
}
