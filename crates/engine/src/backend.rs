//! Seams between the scheduler and the outside world.
//!
//! The scheduler never talks to a terminal directly. A [`Backend`] receives
//! finished frames on the render thread, an [`InputSource`] is moved onto the
//! update thread and polled for keys.

use std::time::Duration;

use anyhow::Result;

use crate::fb::ScreenBuffer;

/// Secondary text surface (a window title in a terminal).
pub trait StatusSurface {
    fn set_status(&mut self, text: &str) -> Result<()>;
}

/// Output side of a terminal.
pub trait Backend: StatusSurface {
    /// Fix the screen geometry to `columns x (rows + 1)` cells and hide the
    /// cursor.
    fn initialize(&mut self, columns: u16, rows: u16) -> Result<()>;

    /// Write a whole frame starting at the top-left corner.
    fn present(&mut self, frame: &ScreenBuffer) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    /// Put the write cursor back at `(0, 0)`.
    fn cursor_home(&mut self) -> Result<()>;

    /// Undo whatever `initialize` changed.
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Input side of a terminal.
pub trait InputSource {
    type Key: Send + 'static;

    /// Wait at most `timeout` for an event. `Duration::ZERO` never blocks.
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Consume exactly one pending event. Events that are not keys yield
    /// `None`.
    fn read(&mut self) -> Result<Option<Self::Key>>;
}
