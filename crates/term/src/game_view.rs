//! GameView: maps a [`Session`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The same
//! [`BoardLayout`] drives drawing and mouse hit-testing, so a click always
//! lands on the cell that was drawn under it.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::session::Session;
use crate::types::{Color, Position};

/// Rows above the board: title, status line, spacer.
const HEADER_H: u16 = 3;

/// Cell size used when the preferred one does not fit the terminal.
const COMPACT_CELL: (u16, u16) = (3, 1);

/// Minimum columns needed to the right of the board for the side panel.
const PANEL_MIN_W: u16 = 12;

const HELP_LINES: [&str; 8] = [
    "arrows  move",
    "enter   play",
    "click   play",
    "r  restart",
    "c  color",
    "b  background",
    "+/-  size",
    "q  quit",
];

const WIN_BG: Rgb = Rgb::new(200, 40, 40);

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

/// Where the board grid sits in the viewport.
///
/// The frame is the outer border; each cell's interior is `cell_w x cell_h`
/// and neighbouring cells share a one-character grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    pub size: u16,
}

impl BoardLayout {
    pub fn frame_w(&self) -> u16 {
        self.size * (self.cell_w + 1) + 1
    }

    pub fn frame_h(&self) -> u16 {
        self.size * (self.cell_h + 1) + 1
    }

    /// Top-left terminal cell of a board cell's interior
    pub fn cell_origin(&self, pos: Position) -> (u16, u16) {
        (
            self.frame_x + 1 + pos.col as u16 * (self.cell_w + 1),
            self.frame_y + 1 + pos.row as u16 * (self.cell_h + 1),
        )
    }

    /// Terminal cell where a board cell's label is drawn
    pub fn cell_center(&self, pos: Position) -> (u16, u16) {
        let (x, y) = self.cell_origin(pos);
        (x + self.cell_w / 2, y + self.cell_h / 2)
    }

    /// Board cell under terminal coordinate `(x, y)`; grid lines map to `None`.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Position> {
        if x <= self.frame_x || y <= self.frame_y {
            return None;
        }
        let dx = x - self.frame_x - 1;
        let dy = y - self.frame_y - 1;
        let (col, in_x) = (dx / (self.cell_w + 1), dx % (self.cell_w + 1));
        let (row, in_y) = (dy / (self.cell_h + 1), dy % (self.cell_h + 1));
        if in_x >= self.cell_w || in_y >= self.cell_h || col >= self.size || row >= self.size {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }
}

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Preferred cell interior width in terminal columns.
    cell_w: u16,
    /// Preferred cell interior height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 5x3 keeps cells roughly square with typical glyph aspect ratios.
        Self { cell_w: 5, cell_h: 3 }
    }
}

impl GameView {
    /// Compute the board placement for a board size and viewport.
    ///
    /// Tries the preferred cell size, then compact cells. `None` when even the
    /// compact board and its header do not fit.
    pub fn layout(&self, board_size: usize, viewport: Viewport) -> Option<BoardLayout> {
        let size = u16::try_from(board_size).ok()?;
        let mut layout = [(self.cell_w, self.cell_h), COMPACT_CELL]
            .into_iter()
            .map(|(cell_w, cell_h)| BoardLayout {
                frame_x: 0,
                frame_y: 0,
                cell_w,
                cell_h,
                size,
            })
            .find(|l| l.frame_w() <= viewport.width && HEADER_H + l.frame_h() <= viewport.height)?;

        layout.frame_x = (viewport.width - layout.frame_w()) / 2;
        layout.frame_y = (viewport.height - HEADER_H - layout.frame_h()) / 2 + HEADER_H;
        Some(layout)
    }

    /// Whether a board of `board_size` can be shown, and so played, in `viewport`
    pub fn fits(&self, board_size: usize, viewport: Viewport) -> bool {
        self.layout(board_size, viewport).is_some()
    }

    /// Map a terminal click to the board cell under it.
    pub fn hit_test(&self, board_size: usize, viewport: Viewport, x: u16, y: u16) -> Option<Position> {
        self.layout(board_size, viewport)?.cell_at(x, y)
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport as needed.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let Some(layout) = self.layout(session.board_size(), viewport) else {
            draw_too_small(fb, session.board_size(), viewport);
            return;
        };
        let header_y = layout.frame_y - HEADER_H;

        let title = CellStyle::fg(Rgb::new(240, 240, 240)).bold();
        fb.text_centered(0, header_y, viewport.width, "TIC TAC TOE", title);

        let status = session.status();
        let status_style = CellStyle::fg(color_rgb(status.color)).bold();
        fb.text_centered(0, header_y + 1, viewport.width, &status.message, status_style);

        let background = session.background();
        let lines = CellStyle::fg(contrast_rgb(background)).on(color_rgb(background));
        fb.grid(
            layout.frame_x,
            layout.frame_y,
            layout.size,
            layout.size,
            layout.cell_w,
            layout.cell_h,
            lines,
        );

        let engine = session.engine();
        let winning = engine.winning_combo();
        for row in 0..session.board_size() {
            for col in 0..session.board_size() {
                let pos = Position::new(row, col);
                let label = engine.board().label_at(pos).unwrap_or("");
                let bg = if winning.contains(&pos) {
                    WIN_BG
                } else {
                    color_rgb(background)
                };
                self.draw_cell(fb, &layout, pos, label, session.cell_color(pos), bg, background);
            }
        }

        self.draw_cursor(fb, &layout, session.cursor(), background);

        let panel_x = layout.frame_x + layout.frame_w() + 2;
        let has_panel = panel_x < viewport.width && viewport.width - panel_x >= PANEL_MIN_W;
        if has_panel {
            self.draw_side_panel(fb, session, viewport, panel_x, layout.frame_y);
        } else if session.show_help() {
            self.draw_help_overlay(fb, &layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        pos: Position,
        label: &str,
        painted: Option<Color>,
        bg: Rgb,
        background: Color,
    ) {
        let (x, y) = layout.cell_origin(pos);
        fb.fill(x, y, layout.cell_w, layout.cell_h, CellStyle::default().on(bg));

        let (_, cy) = layout.cell_center(pos);
        if label.is_empty() {
            let dot = CellStyle::fg(contrast_rgb(background)).on(bg).dim();
            fb.text_centered(x, cy, layout.cell_w, "·", dot);
        } else {
            let ink = painted.map(color_rgb).unwrap_or(Rgb::new(0, 0, 0));
            fb.text_centered(x, cy, layout.cell_w, label, CellStyle::fg(ink).on(bg).bold());
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, layout: &BoardLayout, cursor: Position, background: Color) {
        if layout.cell_w < 3 {
            return;
        }
        let (x, _) = layout.cell_origin(cursor);
        let (_, cy) = layout.cell_center(cursor);
        for (bx, ch) in [(x, '['), (x + layout.cell_w - 1, ']')] {
            let Some(cell) = fb.get(bx, cy) else { continue };
            let style = CellStyle::fg(contrast_rgb(background)).on(cell.style.bg).bold();
            fb.put(bx, cy, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        panel_x: u16,
        top_y: u16,
    ) {
        let heading = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let engine = session.engine();
        let (first, second) = session.labels();
        let (first_score, second_score) = session.score_pair();

        let mut y = top_y;
        fb.text(panel_x, y, "SCORES", heading);
        y += 1;
        for (player_label, score) in [(first, first_score), (second, second_score)] {
            let color = if engine.current_player().label == player_label {
                engine.current_player().color
            } else {
                engine.next_player().color
            };
            fb.text(panel_x, y, player_label, CellStyle::fg(color_rgb(color)).bold());
            fb.text(panel_x + 3, y, &score.to_string(), value);
            y += 1;
        }
        y += 1;

        fb.text(panel_x, y, "BOARD", heading);
        y += 1;
        let size = session.board_size();
        fb.text(panel_x, y, &format!("{}x{}", size, size), value);
        y += 2;

        fb.text(panel_x, y, "KEYS", heading);
        y += 1;
        if session.show_help() {
            for line in HELP_LINES {
                if y >= viewport.height {
                    break;
                }
                fb.text(panel_x, y, line, value);
                y += 1;
            }
        } else {
            fb.text(panel_x, y, "?  help", value.dim());
        }
    }

    fn draw_help_overlay(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        let top = layout.frame_y + layout.frame_h() / 2;
        let top = top.saturating_sub(HELP_LINES.len() as u16 / 2);
        for (i, line) in HELP_LINES.iter().enumerate() {
            fb.text_centered(layout.frame_x, top + i as u16, layout.frame_w(), line, style);
        }
    }
}

/// Drawn instead of the board when the terminal cannot hold it.
fn draw_too_small(fb: &mut FrameBuffer, board_size: usize, viewport: Viewport) {
    let size = board_size as u16;
    let need_w = size * (COMPACT_CELL.0 + 1) + 1;
    let need_h = size * (COMPACT_CELL.1 + 1) + 1 + HEADER_H;
    let mid = viewport.height / 2;

    let warning = CellStyle::fg(Rgb::new(240, 200, 60)).bold();
    fb.text_centered(0, mid.saturating_sub(1), viewport.width, "Terminal too small", warning);
    let need = format!("{0}x{0} board needs {1}x{2}", board_size, need_w, need_h);
    fb.text_centered(0, mid, viewport.width, &need, CellStyle::default());
    let hint = "resize, or - for a smaller board";
    fb.text_centered(0, mid + 1, viewport.width, hint, CellStyle::default().dim());
}

/// Terminal RGB for a display color.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Blue => Rgb::new(60, 100, 230),
        Color::Green => Rgb::new(40, 160, 70),
        Color::Red => Rgb::new(220, 60, 60),
        Color::Orange => Rgb::new(255, 140, 0),
        Color::Purple => Rgb::new(140, 70, 200),
        Color::Cyan => Rgb::new(40, 190, 200),
        Color::Magenta => Rgb::new(210, 60, 190),
        Color::Yellow => Rgb::new(240, 210, 60),
        Color::White => Rgb::new(245, 245, 245),
        Color::LightBlue => Rgb::new(173, 216, 230),
        Color::Gray => Rgb::new(128, 128, 128),
        Color::Black => Rgb::new(0, 0, 0),
    }
}

/// Readable foreground (grid lines, dots, cursor) on a background color.
fn contrast_rgb(background: Color) -> Rgb {
    match background {
        Color::Black | Color::Blue | Color::Purple | Color::Gray => Rgb::new(230, 230, 230),
        _ => Rgb::new(30, 30, 40),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(size: u16) -> BoardLayout {
        BoardLayout {
            frame_x: 10,
            frame_y: 5,
            cell_w: 5,
            cell_h: 3,
            size,
        }
    }

    #[test]
    fn frame_dimensions_include_grid_lines() {
        let l = layout(3);
        assert_eq!(l.frame_w(), 19);
        assert_eq!(l.frame_h(), 13);
        assert_eq!(l.cell_origin(Position::new(0, 0)), (11, 6));
        assert_eq!(l.cell_origin(Position::new(1, 2)), (23, 10));
        assert_eq!(l.cell_center(Position::new(0, 0)), (13, 7));
    }

    #[test]
    fn cell_at_skips_grid_lines() {
        let l = layout(3);
        assert_eq!(l.cell_at(11, 6), Some(Position::new(0, 0)));
        assert_eq!(l.cell_at(15, 8), Some(Position::new(0, 0)));
        assert_eq!(l.cell_at(16, 6), None); // vertical grid line
        assert_eq!(l.cell_at(11, 9), None); // horizontal grid line
        assert_eq!(l.cell_at(10, 6), None); // border
        assert_eq!(l.cell_at(27, 16), Some(Position::new(2, 2)));
        assert_eq!(l.cell_at(28, 16), None); // right border
        assert_eq!(l.cell_at(27, 17), None); // bottom border
        assert_eq!(l.cell_at(0, 0), None);
    }

    #[test]
    fn falls_back_to_compact_cells() {
        let view = GameView::default();
        assert_eq!(view.layout(3, Viewport::new(80, 24)).unwrap().cell_w, 5);
        let compact = view.layout(8, Viewport::new(80, 24)).unwrap();
        assert_eq!((compact.cell_w, compact.cell_h), COMPACT_CELL);
    }

    #[test]
    fn no_layout_when_compact_board_overflows() {
        let view = GameView::default();
        // 10x10 compact: 41 columns, 21 rows plus the header.
        assert!(view.fits(10, Viewport::new(41, 24)));
        assert!(!view.fits(10, Viewport::new(41, 23)));
        assert!(!view.fits(10, Viewport::new(40, 24)));
        assert_eq!(view.hit_test(10, Viewport::new(40, 24), 20, 12), None);
    }
}
