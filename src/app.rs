//! The sample application: a session of the sample rules behind the
//! scheduler's handler interface.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::core::{Session, WorldPolicy};
use crate::engine::{Flow, FrameHandler, ScreenBuffer, SecondsCounter, StatusSurface};
use crate::input::{handle_key_event, should_quit};
use crate::term::WorldView;

pub struct App<P> {
    session: Session<P>,
    view: WorldView,
    seconds: SecondsCounter,
}

impl<P: WorldPolicy> App<P> {
    pub fn new(session: Session<P>) -> Self {
        Self {
            session,
            view: WorldView::default(),
            seconds: SecondsCounter::new(),
        }
    }

    pub fn session(&self) -> &Session<P> {
        &self.session
    }

    /// Whole seconds of tick time seen so far.
    pub fn seconds(&self) -> u64 {
        self.seconds.seconds()
    }
}

impl<P: WorldPolicy> FrameHandler<KeyEvent> for App<P> {
    fn on_tick(&mut self, delta_ms: f64, status: &mut dyn StatusSurface) -> Result<()> {
        if let Some(seconds) = self.seconds.advance(delta_ms) {
            status.set_status(&seconds.to_string())?;
        }
        Ok(())
    }

    fn on_key(&mut self, key: KeyEvent) -> Result<Flow> {
        if should_quit(key) {
            tracing::info!(
                moves = self.session.moves(),
                collected = self.session.collected(),
                "quit requested"
            );
            return Ok(Flow::Exit);
        }
        if let Some(command) = handle_key_event(key) {
            self.session.apply(command);
        }
        Ok(Flow::Continue)
    }

    fn on_redraw(&mut self, frame: &mut ScreenBuffer, _delta_ms: f64, fps: u32) -> Result<()> {
        self.view.draw(self.session.world(), fps, frame);
        Ok(())
    }
}
