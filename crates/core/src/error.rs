//! Construction-time errors for the world model.

use gridwalk_types::{Position, MIN_WORLD_DIM};

/// Errors raised while building a world.
///
/// These are configuration errors: a world that fails to build is never
/// partially constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("world must be at least {min}x{min} cells, got {columns}x{rows}", min = MIN_WORLD_DIM)]
    WorldTooSmall { columns: usize, rows: usize },

    #[error(
        "viewport {view_columns}x{view_rows} does not fit inside world {columns}x{rows}"
    )]
    ViewportTooLarge {
        columns: usize,
        rows: usize,
        view_columns: usize,
        view_rows: usize,
    },

    #[error("entity at ({}, {}) is outside the world", .0.x, .0.y)]
    EntityOutOfBounds(Position),

    #[error("world has no walkable cell to start the player on")]
    NoWalkableCell,
}
