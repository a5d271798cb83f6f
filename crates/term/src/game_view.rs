//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each map cell becomes a `cell_w x cell_h` block of characters. Tiles get a
//! background fill, then a sprite is drawn on top. Pulsing sprites pick one of
//! several glyphs from the animation frame counter.

use crate::core::{GameSnapshot, Grid, Pulse};
use crate::engine::{Notice, NoticeKind};
use crate::fb::{decimal_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{CellKind, Pos};

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

const FLOOR_BG: Rgb = Rgb::new(211, 211, 211);
const FLOOR_GRID: Rgb = Rgb::new(128, 128, 128);
const WALL_FG: Rgb = Rgb::new(0, 100, 0);
const WALL_BG: Rgb = Rgb::new(0, 128, 0);
const STAR_FG: Rgb = Rgb::new(255, 215, 0);
const EXIT_FG: Rgb = Rgb::new(139, 69, 19);
const HAZARD_FG: Rgb = Rgb::new(128, 0, 128);
const PLAYER_FG: Rgb = Rgb::new(160, 82, 45);
const SKY_BG: Rgb = Rgb::new(0, 0, 0);

/// Star glyphs, smallest to largest.
const STAR_GLYPHS: [char; 3] = ['✧', '✦', '★'];
/// Patrol glyphs, smallest to largest.
const HAZARD_GLYPHS: [char; 3] = ['•', '●', '◉'];

/// Rows under the board frame: a spacer and the HUD line.
const HUD_ROWS: u16 = 2;

/// A lightweight terminal renderer for the tile grid.
pub struct GameView {
    /// Map cell width in terminal columns.
    cell_w: u16,
    /// Map cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps cells roughly square with typical glyph aspect ratios.
        Self {
            cell_w: 4,
            cell_h: 2,
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

    /// Size of the bordered board frame in terminal cells.
    fn frame_dims(&self, grid: &Grid) -> (u16, u16) {
        let cols = u16::try_from(grid.width()).unwrap_or(u16::MAX);
        let rows = u16::try_from(grid.height()).unwrap_or(u16::MAX);
        let w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let h = rows.saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Viewport needed to show the whole board and the HUD.
    pub fn frame_size(&self, grid: &Grid) -> Viewport {
        let (w, h) = self.frame_dims(grid);
        Viewport::new(w, h.saturating_add(HUD_ROWS))
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_notice(snap, None, viewport, fb);
    }

    pub fn render_into_with_notice(
        &self,
        snap: &GameSnapshot<'_>,
        notice: Option<&Notice>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(FLOOR_GRID, SKY_BG).into_cell(' '));

        let (frame_w, frame_h) = self.frame_dims(snap.grid);
        let total_h = frame_h.saturating_add(HUD_ROWS);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), SKY_BG);
        fb.draw_box(start_x, start_y, frame_w, frame_h, border);

        for (y, row) in snap.grid.rows().enumerate() {
            for (x, &kind) in row.iter().enumerate() {
                // Origins only grow along a row, so the rest of it is clipped too.
                let Some((px, py)) = self.cell_origin(fb, start_x, start_y, x, y) else {
                    break;
                };
                self.draw_tile(fb, px, py, kind, snap.animation_frame);
            }
        }

        self.draw_player(fb, start_x, start_y, snap.player, snap.animation_frame);
        let hud_w = frame_w.min(viewport.width.saturating_sub(start_x));
        self.draw_hud(fb, snap, start_x, start_y.saturating_add(frame_h).saturating_add(1), hud_w);

        if let Some(notice) = notice {
            self.draw_notice(fb, viewport, notice);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        self.render_with_notice(snap, None, viewport)
    }

    pub fn render_with_notice(
        &self,
        snap: &GameSnapshot<'_>,
        notice: Option<&Notice>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_notice(snap, notice, viewport, &mut fb);
        fb
    }

    /// Top-left terminal position of a map cell, or `None` when it falls
    /// outside the framebuffer.
    fn cell_origin(
        &self,
        fb: &FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: usize,
        y: usize,
    ) -> Option<(u16, u16)> {
        let axis = |start: u16, i: usize, size: u16, limit: u16| {
            let pos = (i as u64)
                .checked_mul(size as u64)?
                .checked_add(start as u64 + 1)?;
            u16::try_from(pos).ok().filter(|&p| p < limit)
        };
        Some((
            axis(start_x, x, self.cell_w, fb.width())?,
            axis(start_y, y, self.cell_h, fb.height())?,
        ))
    }

    /// Terminal row that carries a cell's main sprite.
    fn sprite_row(&self, py: u16) -> u16 {
        py.saturating_add(self.cell_h / 2)
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, px: u16, py: u16, kind: CellKind, frame: u32) {
        if kind == CellKind::Wall {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '▓', CellStyle::new(WALL_FG, WALL_BG));
            return;
        }

        // Every walkable tile sits on floor.
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::new(FLOOR_GRID, FLOOR_BG));
        fb.put_char(px, py, '·', CellStyle::new(FLOOR_GRID, FLOOR_BG));

        let sy = self.sprite_row(py);
        match kind {
            CellKind::Collectible => {
                let glyph = STAR_GLYPHS[Pulse::COLLECTIBLE.step(frame, STAR_GLYPHS.len() as u8) as usize];
                let style = CellStyle::new(STAR_FG, FLOOR_BG).bold();
                self.put_centered_char(fb, px, sy, glyph, style);
            }
            CellKind::Hazard => {
                let glyph = HAZARD_GLYPHS[Pulse::HAZARD.step(frame, HAZARD_GLYPHS.len() as u8) as usize];
                let style = CellStyle::new(HAZARD_FG, FLOOR_BG).bold();
                self.put_centered_char(fb, px, sy, glyph, style);
            }
            CellKind::Exit => self.draw_exit(fb, px, py),
            CellKind::Empty | CellKind::Wall => {}
        }
    }

    /// Half-disc arch: rounded top edge with filled body below.
    fn draw_exit(&self, fb: &mut FrameBuffer, px: u16, py: u16) {
        let arch = CellStyle::new(EXIT_FG, FLOOR_BG);
        if self.cell_w >= 2 {
            fb.put_char(px, py, '╭', arch);
            let right = px.saturating_add(self.cell_w - 1);
            fb.put_char(right, py, '╮', arch);
            for x in px + 1..right.min(fb.width()) {
                fb.put_char(x, py, '─', arch);
            }
        } else {
            fb.put_char(px, py, '∩', arch);
        }
        fb.fill_rect(px, py.saturating_add(1), self.cell_w, self.cell_h - 1, '█', arch);
    }

    /// Head above, body below; the body widens on the breathing peak.
    fn draw_player(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, player: Pos, frame: u32) {
        if player.x < 0 || player.y < 0 {
            return;
        }
        let Some((px, py)) = self.cell_origin(fb, start_x, start_y, player.x as usize, player.y as usize) else {
            return;
        };
        let style = CellStyle::new(PLAYER_FG, FLOOR_BG).bold();
        let body_y = self.sprite_row(py);

        if self.cell_h >= 2 {
            self.put_centered_char(fb, px, body_y - 1, 'o', style);
        }

        let wide = Pulse::PLAYER_BREATH.step(frame, 2) == 1 && self.cell_w >= 3;
        let mid = px.saturating_add((self.cell_w - 1) / 2);
        fb.put_char(mid, body_y, '█', style);
        if wide {
            fb.put_char(mid - 1, body_y, '▐', style);
            fb.put_char(mid.saturating_add(1), body_y, '▌', style);
        }
    }

    fn put_centered_char(&self, fb: &mut FrameBuffer, px: u16, y: u16, ch: char, style: CellStyle) {
        fb.put_char(px.saturating_add((self.cell_w - 1) / 2), y, ch, style);
    }

    /// `MOVES: n   ITEMS c/t`, centered under the board.
    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot<'_>, start_x: u16, y: u16, frame_w: u16) {
        const MOVES: &str = "MOVES: ";
        const ITEMS: &str = "   ITEMS ";

        let label = CellStyle::new(Rgb::new(255, 255, 255), SKY_BG).bold();
        let value = if snap.all_collected() {
            CellStyle::new(STAR_FG, SKY_BG).bold()
        } else {
            CellStyle::new(Rgb::new(220, 220, 220), SKY_BG)
        };

        let width = MOVES.len() as u16
            + decimal_width(snap.moves)
            + ITEMS.len() as u16
            + decimal_width(snap.collected)
            + 1
            + decimal_width(snap.total_collectibles);
        let mut x = start_x.saturating_add(frame_w.saturating_sub(width) / 2);

        x = fb.put_str(x, y, MOVES, label);
        x = fb.put_u32(x, y, snap.moves, label);
        x = fb.put_str(x, y, ITEMS, value);
        x = fb.put_u32(x, y, snap.collected, value);
        x = fb.put_str(x, y, "/", value);
        fb.put_u32(x, y, snap.total_collectibles, value);
    }

    fn draw_notice(&self, fb: &mut FrameBuffer, viewport: Viewport, notice: &Notice) {
        const HINT: &str = "press any key";

        let accent = match notice.kind {
            NoticeKind::GameOver => Rgb::new(230, 80, 80),
            NoticeKind::Victory => Rgb::new(100, 220, 120),
            NoticeKind::ExitBlocked => Rgb::new(240, 220, 80),
        };
        let panel_bg = Rgb::new(30, 30, 40);
        let frame = CellStyle::new(accent, panel_bg);
        let title = CellStyle::new(accent, panel_bg).bold();
        let body = CellStyle::new(Rgb::new(230, 230, 230), panel_bg);
        let hint = CellStyle {
            dim: true,
            ..body
        };

        let text_w = [notice.title.as_str(), notice.message.as_str(), HINT]
            .iter()
            .map(|s| s.chars().count() as u16)
            .max()
            .unwrap_or(0);
        let w = text_w.saturating_add(4).min(viewport.width);
        let h = 5u16.min(viewport.height);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        fb.fill_rect(x, y, w, h, ' ', body);
        fb.draw_box(x, y, w, h, frame);

        let inner_w = w.saturating_sub(2);
        for (i, (s, style)) in [
            (notice.title.as_str(), title),
            (notice.message.as_str(), body),
            (HINT, hint),
        ]
        .into_iter()
        .enumerate()
        {
            let len = s.chars().count() as u16;
            let tx = x + 1 + inner_w.saturating_sub(len) / 2;
            fb.put_str(tx, y + 1 + i as u16, s, style);
        }
    }
}
