//! crossterm-backed key source for the update cadence.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent};

use crate::engine::InputSource;
use crate::renderer::RepaintFlag;

#[derive(Debug, Default)]
pub struct TerminalInput {
    repaint: Option<RepaintFlag>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise `repaint` whenever the terminal reports a resize.
    pub fn with_repaint(mut self, repaint: RepaintFlag) -> Self {
        self.repaint = Some(repaint);
        self
    }

    fn translate(&self, event: Event) -> Option<KeyEvent> {
        match event {
            Event::Key(key) => Some(key),
            Event::Resize(columns, rows) => {
                tracing::debug!(columns, rows, "terminal resized");
                if let Some(repaint) = &self.repaint {
                    repaint.request();
                }
                None
            }
            // Mouse, focus and paste events are consumed and dropped.
            _ => None,
        }
    }
}

impl InputSource for TerminalInput {
    type Key = KeyEvent;

    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Option<KeyEvent>> {
        let event = event::read()?;
        Ok(self.translate(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn resize_requests_repaint() {
        let repaint = RepaintFlag::new();
        let input = TerminalInput::new().with_repaint(repaint.clone());

        assert_eq!(input.translate(Event::Resize(100, 40)), None);
        assert!(repaint.take());
        assert!(!repaint.take());
    }

    #[test]
    fn keys_pass_through_without_repaint() {
        let repaint = RepaintFlag::new();
        let input = TerminalInput::new().with_repaint(repaint.clone());
        let key = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);

        assert_eq!(input.translate(Event::Key(key)), Some(key));
        assert_eq!(input.translate(Event::FocusGained), None);
        assert!(!repaint.take());
    }
}
