//! World module - terrain, viewport and entities, and the windowed projection
//! the renderer reads every frame.
//!
//! The world itself knows no rules. Policies drive it through the
//! [`WorldSurface`] capability trait, which exposes only grid, viewport and
//! registry primitives.

use std::iter::FusedIterator;

use gridwalk_types::{Position, FLOOR, WALL};

use crate::config::WorldConfig;
use crate::entity::{Entity, EntityId, EntityKind, EntityRegistry};
use crate::error::WorldError;
use crate::grid::Grid;
use crate::viewport::Viewport;

/// Primitives a rule set may use to inspect and mutate a world.
pub trait WorldSurface {
    fn columns(&self) -> usize;

    fn rows(&self) -> usize;

    /// Terrain at `pos`, or `None` outside the world.
    fn terrain(&self, pos: Position) -> Option<char>;

    fn registry(&self) -> &EntityRegistry;

    /// Add an entity on top of the draw order.
    fn spawn(&mut self, kind: EntityKind, pos: Position) -> Result<EntityId, WorldError>;

    fn relocate(&mut self, id: EntityId, pos: Position) -> Result<(), WorldError>;

    fn despawn(&mut self, id: EntityId) -> Option<Entity>;

    fn viewport(&self) -> &Viewport;

    fn center_viewport_on(&mut self, pos: Position);

    fn is_occupied(&self, pos: Position) -> bool {
        self.registry().is_occupied(pos)
    }
}

/// Grid + viewport + entity registry.
#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
    viewport: Viewport,
    registry: EntityRegistry,
}

impl World {
    /// Build the sample terrain: a wall ring around open floor.
    pub fn new(config: &WorldConfig) -> Result<Self, WorldError> {
        let mut grid = Grid::new(config.columns, config.rows, FLOOR)?;
        grid.fill_bordered(WALL, FLOOR);
        Self::with_grid(grid, config.view_columns, config.view_rows)
    }

    /// Wrap caller-provided terrain.
    pub fn with_grid(grid: Grid, view_columns: usize, view_rows: usize) -> Result<Self, WorldError> {
        let viewport = Viewport::new(grid.columns(), grid.rows(), view_columns, view_rows)?;
        Ok(Self {
            grid,
            viewport,
            registry: EntityRegistry::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Visible part of the world as rows of characters.
    ///
    /// Every call starts from scratch; the iterator borrows the world and
    /// never writes to it.
    pub fn map(&self) -> MapRows<'_> {
        let start = self.viewport.origin_y();
        MapRows {
            world: self,
            next_row: start,
            end_row: start + self.viewport.rows(),
        }
    }

    /// Composite one terrain row with the entities standing on it, clipped to
    /// the horizontal window.
    fn project_row(&self, y: usize) -> Vec<char> {
        let mut line = self.grid.row(y).to_vec();

        // Registry order is draw order: later entities overwrite earlier ones.
        for entity in self.registry.iter().filter(|e| e.position.y == y as i32) {
            line[entity.position.x as usize] = entity.icon;
        }

        let from = self.viewport.origin_x();
        line.truncate(from + self.viewport.columns());
        line.drain(..from);
        line
    }

    fn check_bounds(&self, pos: Position) -> Result<(), WorldError> {
        if self.grid.contains(pos) {
            Ok(())
        } else {
            Err(WorldError::EntityOutOfBounds(pos))
        }
    }
}

impl WorldSurface for World {
    fn columns(&self) -> usize {
        self.grid.columns()
    }

    fn rows(&self) -> usize {
        self.grid.rows()
    }

    fn terrain(&self, pos: Position) -> Option<char> {
        self.grid.cell(pos)
    }

    fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    fn spawn(&mut self, kind: EntityKind, pos: Position) -> Result<EntityId, WorldError> {
        self.check_bounds(pos)?;
        Ok(self.registry.push(kind, pos))
    }

    fn relocate(&mut self, id: EntityId, pos: Position) -> Result<(), WorldError> {
        self.check_bounds(pos)?;
        if let Some(entity) = self.registry.get_mut(id) {
            entity.position = pos;
        }
        Ok(())
    }

    fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        self.registry.remove(id)
    }

    fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn center_viewport_on(&mut self, pos: Position) {
        self.viewport.center_around(pos.y, pos.x);
    }
}

/// Lazy row-by-row projection returned by [`World::map`].
#[derive(Debug, Clone)]
pub struct MapRows<'a> {
    world: &'a World,
    next_row: usize,
    end_row: usize,
}

impl Iterator for MapRows<'_> {
    type Item = Vec<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_row >= self.end_row {
            return None;
        }
        let row = self.world.project_row(self.next_row);
        self.next_row += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end_row - self.next_row;
        (left, Some(left))
    }
}

impl ExactSizeIterator for MapRows<'_> {}

impl FusedIterator for MapRows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(rows: MapRows<'_>) -> Vec<String> {
        rows.map(|r| r.into_iter().collect()).collect()
    }

    #[test]
    fn construction_rejects_bad_geometry() {
        assert!(matches!(
            World::new(&WorldConfig::new(2, 5, 1, 1)),
            Err(WorldError::WorldTooSmall { .. })
        ));
        assert!(matches!(
            World::new(&WorldConfig::new(5, 5, 6, 3)),
            Err(WorldError::ViewportTooLarge { .. })
        ));
    }

    #[test]
    fn map_is_windowed_and_composited() {
        let mut world = World::new(&WorldConfig::new(6, 5, 4, 3)).unwrap();
        world.spawn(EntityKind::Player, Position::new(2, 2)).unwrap();
        assert_eq!(text(world.map()), vec!["####", "#...", "#.@."]);

        world.center_viewport_on(Position::new(5, 4));
        assert_eq!(text(world.map()), vec!["@..#", "...#", "####"]);
    }

    #[test]
    fn later_entities_draw_on_top() {
        let mut world = World::new(&WorldConfig::new(5, 5, 5, 5)).unwrap();
        world.spawn(EntityKind::Pickup, Position::new(1, 1)).unwrap();
        world.spawn(EntityKind::Player, Position::new(1, 1)).unwrap();
        assert_eq!(world.map().nth(1).unwrap()[1], '@');
    }

    #[test]
    fn spawning_outside_is_refused() {
        let mut world = World::new(&WorldConfig::new(5, 5, 3, 3)).unwrap();
        let pos = Position::new(5, 0);
        assert_eq!(
            world.spawn(EntityKind::Pickup, pos),
            Err(WorldError::EntityOutOfBounds(pos))
        );
        assert!(world.registry().is_empty());
    }

    #[test]
    fn map_restarts_on_every_call() {
        let world = World::new(&WorldConfig::new(8, 6, 4, 4)).unwrap();
        let mut first = world.map();
        first.next();
        assert_eq!(first.len(), 3);
        assert_eq!(world.map().len(), 4);
        assert_eq!(text(world.map()), text(world.map()));
    }
}
