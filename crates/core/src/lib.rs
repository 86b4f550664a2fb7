//! Core world model - pure, deterministic, and testable
//!
//! This crate contains the grid world and the rules that drive it.
//! It has **zero dependencies** on terminals or threads, making it:
//!
//! - **Deterministic**: Same seed produces identical spawn sequences
//! - **Testable**: Every rule can be exercised without a terminal
//! - **Portable**: The projection is plain rows of `char`
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size terrain store in a flat row-major vector
//! - [`viewport`]: the clamped window the renderer shows
//! - [`entity`]: entities and their ordered registry (registry order is draw order)
//! - [`world`]: grid + viewport + registry, the [`WorldSurface`] capability trait
//!   and the windowed projection [`World::map`]
//! - [`policy`]: rule sets; [`SampleRules`] implements movement, contact and respawn
//! - [`session`]: single owner that applies commands atomically
//! - [`rng`]: seeded generator for spawn placement
//!
//! # Example
//!
//! ```
//! use gridwalk_core::{SampleRules, Session, WorldConfig};
//! use gridwalk_types::{Direction, WorldCommand};
//!
//! let config = WorldConfig::new(5, 5, 3, 3).with_seed(7);
//! let mut session = Session::from_config(&config, SampleRules::new(config.seed)).unwrap();
//!
//! session.apply(WorldCommand::Move(Direction::Up));
//!
//! for row in session.world().map() {
//!     assert_eq!(row.len(), 3);
//! }
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod grid;
pub mod policy;
pub mod rng;
pub mod session;
pub mod viewport;
pub mod world;

pub use gridwalk_types as types;

// Re-export commonly used types for convenience
pub use config::WorldConfig;
pub use entity::{Entity, EntityId, EntityKind, EntityRegistry};
pub use error::WorldError;
pub use grid::Grid;
pub use policy::{MoveOutcome, MoveReport, SampleRules, WorldPolicy};
pub use rng::SimpleRng;
pub use session::Session;
pub use viewport::Viewport;
pub use world::{MapRows, World, WorldSurface};
