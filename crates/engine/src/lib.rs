//! Frame engine - the scheduler that drives a terminal game.
//!
//! Two cadences run concurrently for the lifetime of a session:
//!
//! - **Update cadence** (background thread): measures elapsed time, emits a
//!   tick, polls for one key with a bounded wait.
//! - **Render cadence** (calling thread): measures the frame interval,
//!   publishes `fps = floor(1000 / delta_ms)`, applies pending ticks and keys,
//!   allocates a fresh [`ScreenBuffer`], asks the handler to fill it, then
//!   presents, flushes and homes the cursor, in that order.
//!
//! The engine has no terminal dependency of its own. Terminals plug in through
//! the [`Backend`] and [`InputSource`] traits.

pub mod backend;
pub mod clock;
pub mod config;
pub mod error;
pub mod fb;
pub mod scheduler;

pub use gridwalk_types as types;

pub use backend::{Backend, InputSource, StatusSurface};
pub use clock::{fps_from_delta_ms, FpsCounter, FrameClock, SecondsCounter};
pub use config::SchedulerConfig;
pub use error::SchedulerError;
pub use fb::ScreenBuffer;
pub use scheduler::{CadenceEvent, Flow, FrameHandler, FrameScheduler};
