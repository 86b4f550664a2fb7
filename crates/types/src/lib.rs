//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (world model, scheduler, terminal rendering).
//!
//! # Coordinates
//!
//! Positions are `(x, y)` pairs of signed integers:
//!
//! - **x**: column, growing to the right
//! - **y**: row, growing downwards
//!
//! Signed coordinates let movement code compute a candidate cell one step
//! outside the world before it is rejected by bounds checks.
//!
//! # Default Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WORLD_COLUMNS` | 200 | World width in cells |
//! | `DEFAULT_WORLD_ROWS` | 40 | World height in cells |
//! | `DEFAULT_VIEW_COLUMNS` | 80 | Visible window width |
//! | `DEFAULT_VIEW_ROWS` | 20 | Visible window height |
//! | `DEFAULT_CONSOLE_COLUMNS` | 120 | Terminal width |
//! | `DEFAULT_CONSOLE_ROWS` | 30 | Terminal height (one extra row is reserved) |
//!
//! # Examples
//!
//! ```
//! use gridwalk_types::{Direction, Position, WorldCommand};
//!
//! let start = Position::new(2, 2);
//! assert_eq!(start.step(Direction::Up), Position::new(2, 1));
//!
//! let cmd = WorldCommand::Move(Direction::Left);
//! assert_eq!(cmd.as_str(), "moveLeft");
//! ```

/// Impassable terrain marker (the border ring in the sample world).
pub const WALL: char = '#';

/// Passable terrain marker.
pub const FLOOR: char = '.';

/// Player icon.
pub const PLAYER_ICON: char = '@';

/// Pickup icon.
pub const PICKUP_ICON: char = '*';

/// Value every cell of a fresh screen buffer is reset to.
pub const BLANK_CELL: char = '\0';

/// Smallest legal world dimension (a border ring plus one interior cell).
pub const MIN_WORLD_DIM: usize = 3;

pub const DEFAULT_WORLD_COLUMNS: usize = 200;
pub const DEFAULT_WORLD_ROWS: usize = 40;
pub const DEFAULT_VIEW_COLUMNS: usize = 80;
pub const DEFAULT_VIEW_ROWS: usize = 20;
pub const DEFAULT_CONSOLE_COLUMNS: u16 = 120;
pub const DEFAULT_CONSOLE_ROWS: u16 = 30;

/// A cell coordinate in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Cardinal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta as `(dx, dy)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridwalk_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Commands a world policy understands.
///
/// Only the player issues commands; nothing else in the world moves on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldCommand {
    /// Try to move the player one cell
    Move(Direction),
}

impl WorldCommand {
    /// camelCase name, as written to the log.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorldCommand::Move(Direction::Up) => "moveUp",
            WorldCommand::Move(Direction::Down) => "moveDown",
            WorldCommand::Move(Direction::Left) => "moveLeft",
            WorldCommand::Move(Direction::Right) => "moveRight",
        }
    }
}
