//! GameView: maps a `core::GameSnapshot` plus session HUD state into a
//! terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, LineClear, SlotSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::leaderboard::LeaderboardEntry;
use crate::types::{cell_from_code, BOARD_SIZE, INVENTORY_SIZE, MAX_SHAPE_DIM};

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const LEGAL: Rgb = Rgb::new(76, 175, 80);
const ILLEGAL: Rgb = Rgb::new(229, 57, 53);
const FLASH: Rgb = Rgb::new(255, 255, 255);

/// Rows between the board frame and the tray.
const TRAY_GAP: u16 = 1;
/// Columns between tray slots.
const SLOT_GAP: u16 = 2;

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

/// Where the selected piece is being held and whether it fits there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aim {
    pub x: i8,
    pub y: i8,
    pub slot: usize,
    pub legal: bool,
}

/// Session state drawn on top of the engine snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    pub aim: Option<Aim>,
    /// Lines cleared by the last placement while the flash is running.
    pub flash: Option<&'a LineClear>,
    pub best: Option<u32>,
    /// Name typed so far, while the game-over prompt is open.
    pub name_prompt: Option<&'a str>,
    /// Entries to list, while the leaderboard is open.
    pub leaderboard: Option<&'a [LeaderboardEntry]>,
}

/// Board origin in terminal coordinates, computed once per frame.
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// A lightweight terminal renderer for the block puzzle.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &Hud<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(viewport);
        let board_px = BOARD_SIZE as u16 * self.cell_w;

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            board_px,
            BOARD_SIZE as u16,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        fb.draw_box(
            layout.x,
            layout.y,
            layout.frame_w,
            layout.frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        self.draw_cells(fb, snap, hud.flash, layout);
        if !snap.game_over {
            if let Some(aim) = hud.aim {
                self.draw_preview(fb, snap, aim, layout);
            }
        }
        self.draw_tray(fb, snap, hud.aim.map(|a| a.slot), layout);
        self.draw_side_panel(fb, snap, hud.best, viewport, layout);

        if let Some(entries) = hud.leaderboard {
            self.draw_leaderboard(fb, entries, layout);
        } else if let Some(name) = hud.name_prompt {
            self.draw_name_prompt(fb, snap.score, name, layout);
        } else if snap.game_over {
            self.draw_overlay_lines(fb, layout, &["GAME OVER", "r: restart"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = BOARD_SIZE as u16 * self.cell_w + 2;
        let frame_h = BOARD_SIZE as u16 + 2;
        let total_h = frame_h + TRAY_GAP + 1 + MAX_SHAPE_DIM as u16;
        Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(total_h) / 2,
            frame_w,
            frame_h,
        }
    }

    fn cell_origin(&self, layout: Layout, x: u16, y: u16) -> (u16, u16) {
        (layout.x + 1 + x * self.cell_w, layout.y + 1 + y)
    }

    fn draw_cells(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        flash: Option<&LineClear>,
        layout: Layout,
    ) {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let (px, py) = self.cell_origin(layout, x as u16, y as u16);
                let flashing = flash.is_some_and(|f| f.contains(x, y));
                let (ch, style) = match cell_from_code(snap.board[y as usize][x as usize]) {
                    _ if flashing => ('█', CellStyle::new(FLASH, BOARD_BG).bold()),
                    Some(tag) => ('█', CellStyle::new(tag.into(), BOARD_BG)),
                    None => ('·', CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim()),
                };
                fb.fill_rect(px, py, self.cell_w, 1, ch, style);
            }
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, aim: Aim, layout: Layout) {
        let Some(slot) = snap.inventory.get(aim.slot).copied().flatten() else {
            return;
        };
        let style = CellStyle::new(if aim.legal { LEGAL } else { ILLEGAL }, BOARD_BG);
        for (r, c) in slot.shape.cells() {
            let bx = aim.x as i16 + c as i16;
            let by = aim.y as i16 + r as i16;
            if !(0..BOARD_SIZE as i16).contains(&bx) || !(0..BOARD_SIZE as i16).contains(&by) {
                continue;
            }
            let (px, py) = self.cell_origin(layout, bx as u16, by as u16);
            fb.fill_rect(px, py, self.cell_w, 1, '▒', style);
        }
    }

    fn draw_tray(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        selected: Option<usize>,
        layout: Layout,
    ) {
        let slot_w = MAX_SHAPE_DIM as u16 * self.cell_w;
        let tray_w = slot_w * INVENTORY_SIZE as u16 + SLOT_GAP * (INVENTORY_SIZE as u16 - 1);
        let tray_x = (layout.x + layout.frame_w / 2).saturating_sub(tray_w / 2);
        let label_y = layout.y + layout.frame_h + TRAY_GAP;

        let label = CellStyle::new(Rgb::new(160, 160, 160), PANEL_BG);
        for i in 0..INVENTORY_SIZE {
            let sx = tray_x + i as u16 * (slot_w + SLOT_GAP);
            let is_selected = selected == Some(i);
            let style = if is_selected {
                CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold()
            } else {
                label
            };
            let mut cx = fb.put_str(sx, label_y, if is_selected { "[" } else { " " }, style);
            cx = fb.put_u32(cx, label_y, i as u32 + 1, style);
            fb.put_str(cx, label_y, if is_selected { "]" } else { " " }, style);

            match snap.inventory[i] {
                Some(slot) => self.draw_tray_piece(fb, slot, sx, label_y + 1),
                None => {
                    fb.put_str(sx, label_y + 1, "-", label.dim());
                }
            }
        }
    }

    fn draw_tray_piece(&self, fb: &mut FrameBuffer, slot: SlotSnapshot, x: u16, y: u16) {
        let style = CellStyle::new(slot.tag.into(), PANEL_BG);
        for (r, c) in slot.shape.cells() {
            fb.fill_rect(x + c as u16 * self.cell_w, y + r as u16, self.cell_w, 1, '█', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        best: Option<u32>,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = layout.y;
        let mut stat = |fb: &mut FrameBuffer, name: &str, v: u32| {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        };
        // The running score counts as best until the board holds a higher one.
        stat(fb, "SCORE", snap.score);
        stat(fb, "BEST", best.map_or(snap.score, |b| b.max(snap.score)));
        stat(fb, "LINES", snap.lines_cleared);
        stat(fb, "PIECES", snap.pieces_placed);

        let help = CellStyle::new(Rgb::new(140, 140, 140), PANEL_BG).dim();
        for (i, line) in ["arrows  aim", "1-3/tab pick", "enter   place", "b       scores", "q       quit"]
            .iter()
            .enumerate()
        {
            fb.put_str(panel_x, y.saturating_add(i as u16), line, help);
        }
    }

    fn draw_name_prompt(&self, fb: &mut FrameBuffer, score: u32, name: &str, layout: Layout) {
        let mid = layout.y + layout.frame_h / 2;
        let inner_w = layout.frame_w - 2;
        let panel = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG);
        fb.fill_rect(layout.x + 1, mid - 2, inner_w, 5, ' ', panel);

        self.put_centered(fb, layout, mid - 2, "GAME OVER", panel.bold());

        let cx = self.put_centered(fb, layout, mid - 1, "SCORE ", panel);
        fb.put_u32(cx, mid - 1, score, panel.bold());

        // Keep the tail of a long name visible.
        let field_w = inner_w.saturating_sub(2) as usize;
        let typed: String = {
            let n = name.chars().count();
            name.chars().skip((n + 1).saturating_sub(field_w)).collect()
        };
        let end = fb.put_str(layout.x + 2, mid + 1, &typed, panel.bold());
        fb.put_char(end, mid + 1, '_', panel);

        self.put_centered(fb, layout, mid + 2, "enter save  esc skip", panel.dim());
        fb.put_str(layout.x + 2, mid, "NAME", panel.dim());
    }

    fn draw_leaderboard(&self, fb: &mut FrameBuffer, entries: &[LeaderboardEntry], layout: Layout) {
        let panel = CellStyle::new(Rgb::new(230, 230, 230), PANEL_BG);
        let inner_w = layout.frame_w - 2;
        fb.fill_rect(layout.x + 1, layout.y + 1, inner_w, layout.frame_h - 2, ' ', panel);
        // Title sits on the top border so all ten rows fit inside.
        self.put_centered(fb, layout, layout.y, " TOP SCORES ", panel.bold());

        if entries.is_empty() {
            self.put_centered(fb, layout, layout.y + 3, "no scores yet", panel.dim());
            return;
        }

        let left = layout.x + 1;
        let right = layout.x + layout.frame_w - 1;
        for (i, entry) in entries.iter().enumerate().take(BOARD_SIZE as usize) {
            let y = layout.y + 1 + i as u16;
            let rank_end = fb.put_u32(left, y, i as u32 + 1, panel.dim());

            let digits = digit_count(entry.score);
            let score_x = right.saturating_sub(digits + 1);
            let name_x = rank_end + 1;
            let name_w = score_x.saturating_sub(name_x + 1) as usize;
            let name: String = entry.name.chars().take(name_w).collect();
            fb.put_str(name_x, y, &name, panel);
            fb.put_u32(score_x, y, entry.score, panel.bold());
        }
    }

    fn draw_overlay_lines(&self, fb: &mut FrameBuffer, layout: Layout, lines: &[&str]) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let top = (layout.y + layout.frame_h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            self.put_centered(fb, layout, top + i as u16, line, style);
        }
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        y: u16,
        text: &str,
        style: CellStyle,
    ) -> u16 {
        let text_w = text.chars().count() as u16;
        let x = layout.x.saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style)
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
