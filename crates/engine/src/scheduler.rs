//! FrameScheduler: an update cadence and a render cadence running side by side.
//!
//! The update cadence lives on a background thread. It never touches game
//! state; it only measures time, polls for keys, and sends typed
//! [`CadenceEvent`]s over a channel. The render cadence runs on the calling
//! thread and owns the [`FrameHandler`], so every event is applied by the same
//! thread that builds frames. A frame can therefore never observe half of a
//! command.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::{
    self,
    error::{TryRecvError, TrySendError},
    Receiver, Sender,
};

use crate::backend::{Backend, InputSource, StatusSurface};
use crate::clock::{fps_from_delta_ms, FpsCounter, FrameClock};
use crate::config::SchedulerConfig;
use crate::error::SchedulerError;
use crate::fb::ScreenBuffer;

/// Upper bound on events applied between two frames, so a flood of ticks
/// cannot starve the redraw.
const MAX_EVENTS_PER_FRAME: usize = 4096;

/// Capacity of the update → render channel. Ticks that do not fit are folded
/// into the next one that does.
const EVENT_QUEUE_CAPACITY: usize = 64;

/// Message sent from the update cadence to the render cadence.
#[derive(Debug)]
pub enum CadenceEvent<K> {
    /// One update iteration elapsed.
    Tick { delta_ms: f64 },
    /// A key was read.
    Key(K),
    /// The input source failed; the update cadence has stopped.
    Failed(anyhow::Error),
}

/// Whether the scheduler keeps running after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Receives the scheduler's notifications, all on the render thread.
///
/// Any `Err` is fatal: the scheduler stops both cadences and `run` returns it.
pub trait FrameHandler<K> {
    fn on_tick(&mut self, delta_ms: f64, status: &mut dyn StatusSurface) -> Result<()>;

    fn on_key(&mut self, key: K) -> Result<Flow>;

    /// Fill a freshly allocated frame.
    fn on_redraw(&mut self, frame: &mut ScreenBuffer, delta_ms: f64, fps: u32) -> Result<()>;
}

pub struct FrameScheduler<B, I> {
    config: SchedulerConfig,
    backend: B,
    input: Option<I>,
    initialized: bool,
    fps: FpsCounter,
}

impl<B, I> FrameScheduler<B, I>
where
    B: Backend,
    I: InputSource + Send + 'static,
{
    pub fn new(config: SchedulerConfig, backend: B, input: I) -> Self {
        Self {
            config,
            backend,
            input: Some(input),
            initialized: false,
            fps: FpsCounter::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Handle to the FPS published by the render cadence.
    pub fn fps(&self) -> FpsCounter {
        self.fps.clone()
    }

    /// Configure the backend geometry. Exactly once, before [`run`](Self::run).
    pub fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Err(SchedulerError::AlreadyInitialized.into());
        }
        self.backend
            .initialize(self.config.columns, self.config.rows)?;
        self.initialized = true;
        tracing::info!(
            columns = self.config.columns,
            rows = self.config.rows,
            "scheduler initialized"
        );
        Ok(())
    }

    /// Run both cadences until the handler returns [`Flow::Exit`] or anything
    /// fails.
    pub fn run<H: FrameHandler<I::Key>>(&mut self, handler: &mut H) -> Result<()> {
        if !self.initialized {
            return Err(SchedulerError::NotInitialized.into());
        }
        let input = self.input.take().ok_or(SchedulerError::AlreadyRan)?;

        let (tx, mut rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
        let poll_interval = self.config.poll_interval;
        let update = thread::Builder::new()
            .name("gridwalk-update".to_string())
            .spawn(move || update_cadence(input, tx, poll_interval))?;

        let result = self.render_cadence(&mut rx, handler);

        // Closing the channel is what stops the update cadence.
        drop(rx);
        if update.join().is_err() {
            tracing::error!("update cadence panicked");
        }

        match &result {
            Ok(()) => tracing::info!("scheduler stopped"),
            Err(e) => tracing::error!(error = %e, "scheduler torn down"),
        }
        result
    }

    fn render_cadence<H: FrameHandler<I::Key>>(
        &mut self,
        rx: &mut Receiver<CadenceEvent<I::Key>>,
        handler: &mut H,
    ) -> Result<()> {
        let mut clock = FrameClock::start();

        loop {
            let frame_start = Instant::now();
            let delta_ms = clock.lap_ms();
            let fps = fps_from_delta_ms(delta_ms);
            self.fps.publish(fps);

            if self.dispatch_pending(rx, handler)? == Flow::Exit {
                return Ok(());
            }

            let mut frame = ScreenBuffer::new(self.config.columns, self.config.rows);
            handler.on_redraw(&mut frame, delta_ms, fps)?;
            self.backend.present(&frame)?;
            self.backend.flush()?;
            self.backend.cursor_home()?;

            if let Some(cap) = self.config.frame_cap {
                if let Some(rest) = cap.checked_sub(frame_start.elapsed()) {
                    thread::sleep(rest);
                }
            }
        }
    }

    fn dispatch_pending<H: FrameHandler<I::Key>>(
        &mut self,
        rx: &mut Receiver<CadenceEvent<I::Key>>,
        handler: &mut H,
    ) -> Result<Flow> {
        for _ in 0..MAX_EVENTS_PER_FRAME {
            match rx.try_recv() {
                Ok(CadenceEvent::Tick { delta_ms }) => handler.on_tick(delta_ms, &mut self.backend)?,
                Ok(CadenceEvent::Key(key)) => {
                    if handler.on_key(key)? == Flow::Exit {
                        return Ok(Flow::Exit);
                    }
                }
                Ok(CadenceEvent::Failed(e)) => return Err(e.context("update cadence failed")),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    return Err(SchedulerError::UpdateCadenceStopped.into())
                }
            }
        }
        Ok(Flow::Continue)
    }
}

fn update_cadence<I: InputSource>(
    mut input: I,
    tx: Sender<CadenceEvent<I::Key>>,
    poll_interval: Duration,
) {
    let mut clock = FrameClock::start();
    // Elapsed time of ticks the render side had no room for yet.
    let mut pending_ms = 0.0;

    loop {
        pending_ms += clock.lap_ms();
        match tx.try_send(CadenceEvent::Tick { delta_ms: pending_ms }) {
            Ok(()) => pending_ms = 0.0,
            Err(TrySendError::Full(_)) => {}
            Err(TrySendError::Closed(_)) => break,
        }

        let event = match input.poll(poll_interval) {
            Ok(true) => match input.read() {
                Ok(Some(key)) => CadenceEvent::Key(key),
                Ok(None) => continue,
                Err(e) => CadenceEvent::Failed(e),
            },
            Ok(false) => continue,
            Err(e) => CadenceEvent::Failed(e),
        };

        // Keys and failures are never dropped: wait for room, after the
        // folded tick so the tick-then-key order holds.
        if pending_ms > 0.0 {
            if tx
                .blocking_send(CadenceEvent::Tick { delta_ms: pending_ms })
                .is_err()
            {
                break;
            }
            pending_ms = 0.0;
        }
        let failed = matches!(event, CadenceEvent::Failed(_));
        if tx.blocking_send(event).is_err() || failed {
            break;
        }
    }

    tracing::debug!("update cadence stopped");
}
