//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::WorldCommand`]s and
//! recognises the quit keys. Unknown keys map to `None`, never to an error.

pub mod map;

pub use gridwalk_types as types;

pub use map::{handle_key_event, should_quit};
