//! Styled character grid that the view draws into and the renderer flushes.
//!
//! Drawing is clipped: anything outside the buffer is dropped silently, so
//! callers can lay out against the viewport without bounds checks.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const DEFAULT_FG: Rgb = Rgb::new(220, 220, 220);
const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);

/// Colors and attributes of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(DEFAULT_FG)
    }
}

impl CellStyle {
    /// Plain text in `fg` on the default background
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: DEFAULT_BG,
            bold: false,
            dim: false,
        }
    }

    pub const fn on(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank the buffer at the given size, reusing its allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    /// One screen line, empty when `y` is off the buffer
    pub fn row(&self, y: u16) -> &[Cell] {
        match self.offset(0, y) {
            Some(start) => &self.cells[start..start + self.width as usize],
            None => &[],
        }
    }

    pub fn put(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Write `s` starting at `(x, y)`; characters past the right edge are dropped.
    pub fn text(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (dx, ch) in (0..).zip(s.chars()) {
            let Some(cx) = x.checked_add(dx) else { break };
            if cx >= self.width {
                break;
            }
            self.put(cx, y, ch, style);
        }
    }

    /// Write `s` centered on the span `[x, x + w)`, truncated to fit it.
    pub fn text_centered(&mut self, x: u16, y: u16, w: u16, s: &str, style: CellStyle) {
        let len = s.chars().count().min(w as usize);
        let start = x.saturating_add((w - len as u16) / 2);
        let clipped: String = s.chars().take(len).collect();
        self.text(start, y, &clipped, style);
    }

    /// Paint a `w x h` block of blanks.
    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        for cy in y..y.saturating_add(h) {
            for cx in x..x.saturating_add(w) {
                self.put(cx, cy, ' ', style);
            }
        }
    }

    /// Draw box-drawing lines around `cols x rows` cells of `cell_w x cell_h`,
    /// with `(x, y)` as the top-left corner. Cell interiors are left as is.
    #[allow(clippy::too_many_arguments)]
    pub fn grid(
        &mut self,
        x: u16,
        y: u16,
        cols: u16,
        rows: u16,
        cell_w: u16,
        cell_h: u16,
        style: CellStyle,
    ) {
        let w = cols * (cell_w + 1) + 1;
        let h = rows * (cell_h + 1) + 1;
        for gy in 0..h {
            let on_h_line = gy % (cell_h + 1) == 0;
            for gx in 0..w {
                let on_v_line = gx % (cell_w + 1) == 0;
                let ch = match (on_h_line, on_v_line) {
                    (true, true) => junction(gx == 0, gx + 1 == w, gy == 0, gy + 1 == h),
                    (true, false) => '─',
                    (false, true) => '│',
                    (false, false) => continue,
                };
                self.put(x + gx, y + gy, ch, style);
            }
        }
    }

    #[inline]
    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}

/// Box-drawing character where a horizontal and a vertical line meet.
fn junction(left: bool, right: bool, top: bool, bottom: bool) -> char {
    match (left, right, top, bottom) {
        (true, _, true, _) => '┌',
        (_, true, true, _) => '┐',
        (true, _, _, true) => '└',
        (_, true, _, true) => '┘',
        (_, _, true, _) => '┬',
        (_, _, _, true) => '┴',
        (true, _, _, _) => '├',
        (_, true, _, _) => '┤',
        _ => '┼',
    }
}
