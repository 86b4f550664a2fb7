//! Viewport module - the clamped window the renderer shows.

use gridwalk_types::Position;

use crate::error::WorldError;

/// A fixed-size window into a world, always kept fully inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    world_columns: usize,
    world_rows: usize,
    columns: usize,
    rows: usize,
    origin_x: usize,
    origin_y: usize,
}

impl Viewport {
    /// Create a viewport anchored at the world origin.
    pub fn new(
        world_columns: usize,
        world_rows: usize,
        columns: usize,
        rows: usize,
    ) -> Result<Self, WorldError> {
        if columns > world_columns || rows > world_rows {
            return Err(WorldError::ViewportTooLarge {
                columns: world_columns,
                rows: world_rows,
                view_columns: columns,
                view_rows: rows,
            });
        }
        Ok(Self {
            world_columns,
            world_rows,
            columns,
            rows,
            origin_x: 0,
            origin_y: 0,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn origin_x(&self) -> usize {
        self.origin_x
    }

    pub fn origin_y(&self) -> usize {
        self.origin_y
    }

    /// Largest legal origin on each axis.
    pub fn max_origin(&self) -> (usize, usize) {
        (self.world_columns - self.columns, self.world_rows - self.rows)
    }

    /// Move the window so `(x, y)` sits in its middle, then clamp it back
    /// inside the world.
    pub fn center_around(&mut self, y: i32, x: i32) {
        let (max_x, max_y) = self.max_origin();
        self.origin_x = clamp_origin(x as i64 - (self.columns / 2) as i64, max_x);
        self.origin_y = clamp_origin(y as i64 - (self.rows / 2) as i64, max_y);
    }

    /// Check if a world position is inside the window.
    pub fn contains(&self, pos: Position) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        x >= self.origin_x
            && x < self.origin_x + self.columns
            && y >= self.origin_y
            && y < self.origin_y + self.rows
    }
}

fn clamp_origin(raw: i64, max: usize) -> usize {
    raw.clamp(0, max as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_viewport_is_rejected() {
        assert!(matches!(
            Viewport::new(10, 10, 11, 5),
            Err(WorldError::ViewportTooLarge { .. })
        ));
        assert!(Viewport::new(10, 10, 5, 11).is_err());
        assert!(Viewport::new(10, 10, 10, 10).is_ok());
        assert!(Viewport::new(10, 10, 0, 0).is_ok());
    }

    #[test]
    fn centers_in_open_space() {
        let mut vp = Viewport::new(100, 50, 20, 10).unwrap();
        vp.center_around(25, 50);
        assert_eq!((vp.origin_x(), vp.origin_y()), (40, 20));
        assert!(vp.contains(Position::new(50, 25)));
    }

    #[test]
    fn clamps_against_every_edge() {
        let mut vp = Viewport::new(100, 50, 20, 10).unwrap();
        vp.center_around(0, 0);
        assert_eq!((vp.origin_x(), vp.origin_y()), (0, 0));
        vp.center_around(49, 99);
        assert_eq!((vp.origin_x(), vp.origin_y()), (80, 40));
    }

    #[test]
    fn full_size_viewport_never_moves() {
        let mut vp = Viewport::new(7, 5, 7, 5).unwrap();
        vp.center_around(4, 6);
        assert_eq!((vp.origin_x(), vp.origin_y()), (0, 0));
    }
}
