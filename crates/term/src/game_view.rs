//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::clock::format_elapsed;
use crate::core::{GameSnapshot, TileView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{TileId, BOARD_COLUMNS};

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

/// A lightweight terminal renderer for the pairs board.
pub struct GameView {
    /// Tile slot width in terminal columns (box plus spacing).
    tile_w: u16,
    /// Tile slot height in terminal rows (box plus spacing).
    tile_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x4 slots hold a 5x3 tile box plus one cell of spacing, roomy
        // enough for an emoji face.
        Self {
            tile_w: 6,
            tile_h: 4,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// `cursor` is the tile the input layer currently targets; `None` hides
    /// the cursor marker (headless rendering).
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<TileId>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let columns = BOARD_COLUMNS as u16;
        let rows = board_rows(snap.tiles.len());

        let board_px_w = columns * self.tile_w;
        let board_px_h = rows * self.tile_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;
        // HUD line plus a blank line above the board frame, hint line below.
        let total_h = frame_h + 3;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let top_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        let frame_y = top_y + 2;

        self.draw_hud(fb, snap, start_x, top_y, frame_w);

        let border = CellStyle {
            fg: Rgb::new(85, 128, 233),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(fb, start_x, frame_y, frame_w, frame_h, border);

        for (index, tile) in snap.tiles.iter().enumerate() {
            let col = (index as u16) % columns;
            let row = (index as u16) / columns;
            let in_mismatch = snap
                .pending_mismatch
                .map(|pair| pair.contains(&tile.id))
                .unwrap_or(false);
            let under_cursor = cursor == Some(tile.id);
            self.draw_tile(fb, start_x, frame_y, col, row, tile, in_mismatch, under_cursor);
        }

        let hint = CellStyle {
            fg: Rgb::new(140, 140, 150),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };
        fb.put_str(
            start_x,
            frame_y + frame_h,
            "SPACE FLIP  R RESTART  Q QUIT",
            hint,
        );

        if snap.won {
            self.draw_win_overlay(fb, start_x, frame_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<TileId>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        y: u16,
        frame_w: u16,
    ) {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let clock = CellStyle {
            fg: Rgb::new(164, 187, 245),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        let pairs = format!("PAIRS {}/{}", snap.match_count, snap.total_pairs);
        let time = format_elapsed(snap.elapsed_seconds);
        let turns = format!("TURNS {}", snap.turn_count);

        fb.put_str(start_x, y, &pairs, label);

        let time_w = time.chars().count() as u16;
        let time_x = start_x + frame_w.saturating_sub(time_w) / 2;
        fb.put_str(time_x, y, &time, clock);

        let turns_w = turns.chars().count() as u16;
        let turns_x = start_x + frame_w.saturating_sub(turns_w);
        fb.put_str(turns_x, y, &turns, label);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        tile: &TileView,
        in_mismatch: bool,
        under_cursor: bool,
    ) {
        let (style, face) = tile_appearance(tile, in_mismatch);

        // One cell of spacing on the right and bottom of each slot.
        let box_w = self.tile_w.saturating_sub(1);
        let box_h = self.tile_h.saturating_sub(1);
        let px = start_x + 1 + col * self.tile_w;
        let py = start_y + 1 + row * self.tile_h;

        fb.fill_rect(px, py, box_w, box_h, ' ', style);

        let face_y = py + box_h / 2;
        let face_x = px + box_w / 2;
        fb.put_str(face_x, face_y, face, style);

        if under_cursor {
            let marker = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: style.bg,
                bold: true,
                dim: false,
            };
            fb.put_char(px, face_y, '[', marker);
            fb.put_char(px + box_w.saturating_sub(1), face_y, ']', marker);
        }
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

    fn draw_win_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        let mid_y = start_y.saturating_add(frame_h / 2);
        for (dy, text) in ["YOU WON!", "PRESS R TO PLAY AGAIN"].iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            let y = mid_y.saturating_sub(1).saturating_add(dy as u16 * 2);
            fb.put_str(x, y, text, style);
        }
    }
}

fn board_rows(tile_count: usize) -> u16 {
    tile_count.div_ceil(BOARD_COLUMNS) as u16
}

fn tile_appearance(tile: &TileView, in_mismatch: bool) -> (CellStyle, &str) {
    if tile.matched {
        // Locked pair: green, face stays up.
        let style = CellStyle {
            fg: Rgb::new(245, 245, 245),
            bg: Rgb::new(46, 140, 80),
            bold: true,
            dim: false,
        };
        return (style, tile.symbol.unwrap_or("?"));
    }

    if tile.revealed {
        let bg = if in_mismatch {
            // Failed attempt waiting for its flip-back.
            Rgb::new(190, 60, 60)
        } else {
            Rgb::new(90, 90, 110)
        };
        let style = CellStyle {
            fg: Rgb::new(245, 245, 245),
            bg,
            bold: true,
            dim: false,
        };
        return (style, tile.symbol.unwrap_or("?"));
    }

    // Face-down tile.
    let style = CellStyle {
        fg: Rgb::new(245, 245, 245),
        bg: Rgb::new(164, 187, 245),
        bold: false,
        dim: false,
    };
    (style, "?")
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::fb::Cell {
        crate::fb::Cell { ch, style: self }
    }
}
