//! gridwalk (workspace facade crate).
//!
//! This package exposes `gridwalk::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub mod app;
pub mod logging;

pub use gridwalk_core as core;
pub use gridwalk_engine as engine;
pub use gridwalk_input as input;
pub use gridwalk_term as term;
pub use gridwalk_types as types;
