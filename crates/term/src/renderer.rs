//! TerminalBackend: flushes screen buffers to a real terminal.
//!
//! The first frame (and any frame after a size change or a repaint request)
//! is written in full; later frames only rewrite the runs of cells that
//! changed.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::engine::{Backend, ScreenBuffer, StatusSurface};

/// Cross-thread request for a full repaint.
///
/// The input source raises it when the terminal is resized (the terminal may
/// have wiped or reflowed the screen); the backend takes it before encoding
/// the next frame.
#[derive(Debug, Clone, Default)]
pub struct RepaintFlag(Arc<AtomicBool>);

impl RepaintFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Clear the flag, returning whether a repaint was requested.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

pub struct TerminalBackend {
    stdout: io::Stdout,
    last: Option<ScreenBuffer>,
    buf: Vec<u8>,
    entered: bool,
    repaint: RepaintFlag,
}

impl Default for TerminalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            entered: false,
            repaint: RepaintFlag::new(),
        }
    }

    /// Share a repaint flag with whoever observes screen-clobbering events.
    pub fn with_repaint(mut self, repaint: RepaintFlag) -> Self {
        self.repaint = repaint;
        self
    }

    /// Force the next frame to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl StatusSurface for TerminalBackend {
    fn set_status(&mut self, text: &str) -> Result<()> {
        self.stdout.queue(terminal::SetTitle(text))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Backend for TerminalBackend {
    fn initialize(&mut self, columns: u16, rows: u16) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::SetSize(columns, rows.saturating_add(1)))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        tracing::debug!(columns, rows, "terminal entered");
        Ok(())
    }

    fn present(&mut self, frame: &ScreenBuffer) -> Result<()> {
        if self.repaint.take() {
            tracing::debug!("full repaint requested");
            self.invalidate();
        }
        match &self.last {
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
                encode_diff_into(prev, frame, &mut self.buf)?;
            }
            _ => encode_full_into(frame, &mut self.buf)?,
        }
        self.last = Some(frame.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_buf()
    }

    fn cursor_home(&mut self) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        tracing::debug!("terminal restored");
        Ok(())
    }
}

/// Blank and control cells are drawn as spaces.
fn display_char(ch: char) -> char {
    if ch.is_control() {
        ' '
    } else {
        ch
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &ScreenBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut line = String::with_capacity(fb.width() as usize);
    for y in 0..fb.height() {
        line.clear();
        line.extend(fb.row(y).unwrap_or_default().iter().map(|&c| display_char(c)));
        out.queue(Print(&line))?;
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &ScreenBuffer, next: &ScreenBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut run = String::new();
    for_each_changed_run(prev, next, |x, y, len| {
        run.clear();
        let row = next.row(y).unwrap_or_default();
        run.extend(
            row[x as usize..(x + len) as usize]
                .iter()
                .map(|&c| display_char(c)),
        );
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(Print(&run))?;
        Ok(())
    })
}

fn for_each_changed_run(
    prev: &ScreenBuffer,
    next: &ScreenBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = ScreenBuffer::new(5, 1);
        let mut b = ScreenBuffer::new(5, 1);

        // Change cells [1..=3] into X.
        for x in 1..=3 {
            b.set(x, 0, 'X');
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn identical_frames_encode_nothing() {
        let mut a = ScreenBuffer::new(3, 2);
        a.put_str(0, 0, "abc");
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn full_encode_blanks_null_cells() {
        let mut fb = ScreenBuffer::new(3, 2);
        fb.put_str(0, 0, "@");
        fb.put_str(0, 1, "#.#");
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("@  \r\n#.#"));
        assert!(!text.contains('\0'));
    }

    #[test]
    fn repaint_request_forces_full_frame() {
        let repaint = RepaintFlag::new();
        let mut backend = TerminalBackend::new().with_repaint(repaint.clone());
        let mut fb = ScreenBuffer::new(3, 2);
        fb.put_str(0, 0, "#@#");

        backend.present(&fb).unwrap();
        assert!(!backend.buf.is_empty());
        backend.buf.clear();

        // Same frame again: nothing changed, nothing to write.
        backend.present(&fb).unwrap();
        assert!(backend.buf.is_empty());

        repaint.request();
        backend.present(&fb).unwrap();
        let mut full = Vec::new();
        encode_full_into(&fb, &mut full).unwrap();
        assert_eq!(backend.buf, full);
        assert!(!repaint.take());
    }

    #[test]
    fn invalidate_forces_full_frame() {
        let mut backend = TerminalBackend::new();
        let fb = ScreenBuffer::new(2, 2);
        backend.present(&fb).unwrap();
        backend.buf.clear();

        backend.invalidate();
        backend.present(&fb).unwrap();
        let mut full = Vec::new();
        encode_full_into(&fb, &mut full).unwrap();
        assert_eq!(backend.buf, full);
    }
}
