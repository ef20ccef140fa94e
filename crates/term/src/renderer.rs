//! TerminalRenderer: puts frames on a real terminal.
//!
//! The first frame after [`TerminalRenderer::enter`], [`TerminalRenderer::invalidate`]
//! or a size change repaints every line. Later frames are compared with the
//! one on screen line by line and only runs of changed cells are rewritten.

use std::io::{self, Write};
use std::mem;

use anyhow::Result;

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen.
    shown: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            bytes: Vec::with_capacity(8 * 1024),
        }
    }

    /// Raw mode on the alternate screen, cursor hidden, mouse clicks reported.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.bytes.clear();
        self.bytes
            .queue(terminal::EnterAlternateScreen)?
            .queue(event::EnableMouseCapture)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.shown = None;
        self.flush()
    }

    /// Undo [`enter`](Self::enter).
    pub fn exit(&mut self) -> Result<()> {
        self.bytes.clear();
        self.bytes
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(event::DisableMouseCapture)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next [`present`](Self::present), e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`.
    ///
    /// On return `fb` holds a stale frame of the same size that the caller
    /// redraws into, so no frame is allocated in steady state.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let shown = self
            .shown
            .take()
            .filter(|prev| prev.width() == fb.width() && prev.height() == fb.height());

        self.bytes.clear();
        encode_frame(shown.as_ref(), fb, &mut self.bytes)?;
        self.flush()?;

        let mut spare = shown.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        mem::swap(&mut spare, fb);
        self.shown = Some(spare);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.bytes)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// `None` means the screen content is unknown: it is cleared and every line
/// of `next` is written.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    for y in 0..next.height() {
        let line = next.row(y);
        match prev {
            None => pen.write_run(out, 0, y, line)?,
            Some(prev) => {
                for (x, run) in changed_runs(prev.row(y), line) {
                    pen.write_run(out, x, y, run)?;
                }
            }
        }
    }

    out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Maximal spans of `new` that differ from `old`, as `(start column, cells)`.
fn changed_runs<'a>(old: &[Cell], new: &'a [Cell]) -> Vec<(u16, &'a [Cell])> {
    let differs = |x: usize| old.get(x) != new.get(x);
    let mut runs = Vec::new();
    let mut x = 0;
    while x < new.len() {
        if !differs(x) {
            x += 1;
            continue;
        }
        let start = x;
        while x < new.len() && differs(x) {
            x += 1;
        }
        runs.push((start as u16, &new[start..x]));
    }
    runs
}

/// Tracks the style last sent so repeated styles are not re-emitted.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn write_run(&mut self, out: &mut Vec<u8>, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        out.queue(cursor::MoveTo(x, y))?;
        for cell in cells {
            if self.style != Some(cell.style) {
                self.set_style(out, cell.style)?;
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn set_style(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        out.queue(SetAttribute(Attribute::Reset))?
            .queue(SetForegroundColor(true_color(style.fg)))?
            .queue(SetBackgroundColor(true_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.style = Some(style);
        Ok(())
    }
}

fn true_color(Rgb { r, g, b }: Rgb) -> Color {
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(width: u16, marks: &[(u16, char)]) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, 1);
        for &(x, ch) in marks {
            fb.put(x, 0, ch, CellStyle::default());
        }
        fb
    }

    #[test]
    fn runs_cover_only_changed_cells() {
        let before = marked(8, &[(6, 'O')]);
        let after = marked(8, &[(1, 'X'), (2, 'X'), (4, 'O')]);

        let runs: Vec<(u16, usize)> = changed_runs(before.row(0), after.row(0))
            .into_iter()
            .map(|(x, cells)| (x, cells.len()))
            .collect();
        assert_eq!(runs, vec![(1, 2), (4, 1), (6, 1)]);
    }

    #[test]
    fn unchanged_frame_prints_no_cells() {
        let frame = marked(6, &[(2, 'X')]);
        let mut out = Vec::new();
        encode_frame(Some(&frame), &frame, &mut out).unwrap();
        assert!(!String::from_utf8_lossy(&out).contains('X'));

        out.clear();
        encode_frame(None, &frame, &mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).contains('X'));
    }

    #[test]
    fn style_is_sent_once_per_change() {
        let frame = FrameBuffer::new(10, 1);
        let mut out = Vec::new();
        encode_frame(None, &frame, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        // One foreground for the whole uniform line.
        assert_eq!(text.matches("38;2;").count(), 1);
    }
}
