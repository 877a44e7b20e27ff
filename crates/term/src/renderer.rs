//! TerminalRenderer: presents framebuffers on the real terminal.
//!
//! Only cells that differ from the previously presented frame are written,
//! grouped into horizontal runs. A size change or [`TerminalRenderer::invalidate`]
//! forces a full redraw.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

/// A horizontal span of changed cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer {
    out: io::Stdout,
    previous: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            previous: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor and mouse reporting
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo everything `enter` did
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to redraw every cell (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.previous {
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
                encode_runs(frame, changed_runs(prev, frame), &mut self.buf)?;
            }
            _ => {
                self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
                let full = (0..frame.height()).map(|y| Run {
                    x: 0,
                    y,
                    len: frame.width(),
                });
                encode_runs(frame, full, &mut self.buf)?;
            }
        }
        self.flush()?;

        match &mut self.previous {
            Some(prev) => prev.clone_from(frame),
            None => self.previous = Some(frame.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs of cells in `next` that differ from `prev` (same dimensions).
pub fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = Run> + 'a {
    (0..next.height()).flat_map(move |y| {
        let (old, new) = (prev.row(y), next.row(y));
        let mut runs = Vec::new();
        let mut start: Option<u16> = None;
        for x in 0..new.len() {
            let differs = old.get(x) != Some(&new[x]);
            match (differs, start) {
                (true, None) => start = Some(x as u16),
                (false, Some(s)) => {
                    runs.push(Run { x: s, y, len: x as u16 - s });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(Run { x: s, y, len: new.len() as u16 - s });
        }
        runs
    })
}

/// Queue the cursor moves, style changes and characters for `runs`.
pub fn encode_runs(
    frame: &FrameBuffer,
    runs: impl Iterator<Item = Run>,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut current: Option<Style> = None;
    for run in runs {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        for glyph in frame.row(run.y).iter().skip(run.x as usize).take(run.len as usize) {
            if current != Some(glyph.style) {
                queue_style(out, glyph.style)?;
                current = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn queue_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(color(style.fg)))?;
    out.queue(SetBackgroundColor(color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
