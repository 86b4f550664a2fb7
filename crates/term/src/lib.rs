//! Terminal "game renderer" module.
//!
//! The terminal side of the engine: a crossterm backend that writes screen
//! buffers, a crossterm key source, and a pure view that lays a world out in a
//! screen buffer.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the scheduler unaware of crossterm
//! - Only rewrite the cells that changed between frames

pub mod input;
pub mod renderer;
pub mod world_view;

pub use gridwalk_core as core;
pub use gridwalk_engine as engine;
pub use gridwalk_types as types;

pub use input::TerminalInput;
pub use renderer::{encode_diff_into, encode_full_into, RepaintFlag, TerminalBackend};
pub use world_view::WorldView;
