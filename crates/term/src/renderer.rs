//! Screen: owns the terminal session and presents framebuffers to it.
//!
//! Each frame is encoded against the last one presented. Only spans of glyphs
//! that changed are written; a size change or [`Screen::invalidate`] forces a
//! clear and full repaint.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{self, Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style};

pub struct Screen {
    stdout: io::Stdout,
    /// Frame currently on the terminal, if known.
    shown: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            bytes: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.stdout.flush()?;
        self.shown = None;
        Ok(())
    }

    /// Undo [`enter`](Self::enter). Safe to call after a failed frame.
    pub fn leave(&mut self) -> Result<()> {
        queue!(
            self.stdout,
            style::ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.bytes.clear();
        encode_frame(self.shown.as_ref(), fb, &mut self.bytes)?;
        self.stdout.write_all(&self.bytes)?;
        self.stdout.flush()?;

        match self.shown.as_mut() {
            Some(shown) => shown.clone_from(fb),
            None => self.shown = Some(fb.clone()),
        }
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the terminal output that turns `prev` into `next`.
///
/// With no previous frame, or one of another size, the screen is cleared and
/// every glyph is written. Returns the number of glyphs written.
pub fn encode_frame(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<usize> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        queue!(out, terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    let mut written = 0;
    for y in 0..next.height() {
        let row = next.row(y);
        let spans = match prev {
            Some(prev) => changed_spans(prev.row(y), row),
            None => vec![0..next.width()],
        };
        for span in spans {
            queue!(out, cursor::MoveTo(span.start, y))?;
            for glyph in &row[span.start as usize..span.end as usize] {
                pen.put(out, glyph)?;
                written += 1;
            }
        }
    }

    if written > 0 {
        queue!(out, style::ResetColor, SetAttribute(Attribute::Reset))?;
    }
    Ok(written)
}

/// Maximal runs of columns where the two rows differ.
fn changed_spans(before: &[Glyph], after: &[Glyph]) -> Vec<Range<u16>> {
    let mut spans = Vec::new();
    let mut start = None;
    for (x, (a, b)) in before.iter().zip(after).enumerate() {
        let x = x as u16;
        match (a != b, start) {
            (true, None) => start = Some(x),
            (false, Some(s)) => {
                spans.push(s..x);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push(s..after.len() as u16);
    }
    spans
}

/// Tracks the active terminal style so it is only re-sent when it changes.
#[derive(Default)]
struct Pen {
    style: Option<Style>,
}

impl Pen {
    fn put(&mut self, out: &mut Vec<u8>, glyph: &Glyph) -> io::Result<()> {
        if self.style != Some(glyph.style) {
            let s = glyph.style;
            queue!(
                out,
                SetAttribute(Attribute::Reset),
                SetForegroundColor(term_color(s.fg)),
                SetBackgroundColor(term_color(s.bg))
            )?;
            if s.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            self.style = Some(s);
        }
        queue!(out, Print(glyph.ch))
    }
}

fn term_color(rgb: Rgb) -> style::Color {
    style::Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
