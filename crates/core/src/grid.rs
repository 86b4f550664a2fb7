//! Grid module - fixed-size terrain store
//!
//! The grid is a `columns x rows` field of terrain characters kept in a flat
//! row-major vector for cache locality.
//! Coordinates: (x, y) where x ranges 0..columns (left to right), y ranges 0..rows
//! (top to bottom); the flat index is `x + columns * y`.

use gridwalk_types::{Position, MIN_WORLD_DIM};

use crate::error::WorldError;

/// Terrain store with dimensions fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<char>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`.
    pub fn new(columns: usize, rows: usize, fill: char) -> Result<Self, WorldError> {
        if columns < MIN_WORLD_DIM || rows < MIN_WORLD_DIM {
            return Err(WorldError::WorldTooSmall { columns, rows });
        }
        Ok(Self {
            columns,
            rows,
            cells: vec![fill; columns * rows],
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.columns && y < self.rows, "({x}, {y}) outside grid");
        x + self.columns * y
    }

    /// Read a cell without converting coordinates.
    ///
    /// Callers are responsible for bounds; use [`Grid::cell`] for anything
    /// derived from input.
    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> char {
        self.cells[self.index(x, y)]
    }

    /// Write a cell without converting coordinates. Setup only.
    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        let i = self.index(x, y);
        self.cells[i] = ch;
    }

    /// Check if position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.columns && (pos.y as usize) < self.rows
    }

    /// Bounds-checked read.
    /// Returns None if out of bounds
    pub fn cell(&self, pos: Position) -> Option<char> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.get(pos.x as usize, pos.y as usize))
    }

    /// A full terrain row.
    pub fn row(&self, y: usize) -> &[char] {
        let start = self.index(0, y);
        &self.cells[start..start + self.columns]
    }

    /// Paint `wall` on the outer ring and `floor` everywhere else.
    pub fn fill_bordered(&mut self, wall: char, floor: char) {
        for y in 0..self.rows {
            for x in 0..self.columns {
                let edge = y == 0 || y == self.rows - 1 || x == 0 || x == self.columns - 1;
                self.set(x, y, if edge { wall } else { floor });
            }
        }
    }
}
