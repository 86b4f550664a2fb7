//! World tests - viewport clamping and the windowed projection

use gridwalk::core::{EntityKind, Grid, World, WorldConfig, WorldSurface};
use gridwalk::types::Position;

fn rows_as_text(world: &World) -> Vec<String> {
    world.map().map(|r| r.into_iter().collect()).collect()
}

#[test]
fn test_viewport_origin_always_clamped() {
    for (columns, rows) in [(3usize, 3usize), (5, 5), (7, 4), (12, 9)] {
        for view_columns in 0..=columns {
            for view_rows in 0..=rows {
                let mut world =
                    World::new(&WorldConfig::new(columns, rows, view_columns, view_rows)).unwrap();
                for y in 0..rows as i32 {
                    for x in 0..columns as i32 {
                        world.center_viewport_on(Position::new(x, y));
                        let vp = world.viewport();
                        assert!(
                            vp.origin_x() <= columns - view_columns,
                            "origin_x {} for world {}x{} view {}x{} target ({}, {})",
                            vp.origin_x(),
                            columns,
                            rows,
                            view_columns,
                            view_rows,
                            x,
                            y
                        );
                        assert!(vp.origin_y() <= rows - view_rows);
                    }
                }
            }
        }
    }
}

#[test]
fn test_map_yields_exactly_the_visible_rows() {
    let mut world = World::new(&WorldConfig::new(20, 12, 7, 5)).unwrap();
    world.center_viewport_on(Position::new(10, 6));

    let rows: Vec<Vec<char>> = world.map().collect();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.len() == 7));

    // origin = (10 - 3, 6 - 2) = (7, 4): all interior floor.
    assert_eq!(world.viewport().origin_x(), 7);
    assert_eq!(world.viewport().origin_y(), 4);
    assert!(rows.iter().flatten().all(|&c| c == '.'));
}

#[test]
fn test_map_overlays_entities_in_registry_order() {
    let mut world = World::new(&WorldConfig::new(5, 5, 5, 5)).unwrap();
    world.spawn(EntityKind::Player, Position::new(2, 2)).unwrap();
    world.spawn(EntityKind::Pickup, Position::new(2, 2)).unwrap();
    world.spawn(EntityKind::Pickup, Position::new(3, 1)).unwrap();

    assert_eq!(
        rows_as_text(&world),
        vec!["#####", "#..*#", "#.*.#", "#...#", "#####"]
    );
}

#[test]
fn test_map_hides_entities_outside_the_window() {
    let mut world = World::new(&WorldConfig::new(10, 10, 3, 3)).unwrap();
    world.spawn(EntityKind::Pickup, Position::new(8, 8)).unwrap();
    world.center_viewport_on(Position::new(1, 1));
    assert!(world.map().flatten().all(|c| c != '*'));

    world.center_viewport_on(Position::new(8, 8));
    assert!(world.map().flatten().any(|c| c == '*'));
}

#[test]
fn test_map_does_not_mutate_world() {
    let mut world = World::new(&WorldConfig::new(6, 6, 4, 4)).unwrap();
    world.spawn(EntityKind::Player, Position::new(1, 1)).unwrap();
    let before = rows_as_text(&world);
    let _ = world.map().count();
    assert_eq!(rows_as_text(&world), before);
    assert_eq!(world.grid().get(1, 1), '.');
}

#[test]
fn test_custom_terrain_is_projected_verbatim() {
    let mut grid = Grid::new(4, 3, '.').unwrap();
    grid.set(1, 1, '~');
    let world = World::with_grid(grid, 4, 3).unwrap();
    assert_eq!(rows_as_text(&world), vec!["....", ".~..", "...."]);
}

#[test]
fn test_zero_sized_viewport_yields_nothing() {
    let world = World::new(&WorldConfig::new(5, 5, 0, 0)).unwrap();
    assert_eq!(world.map().count(), 0);
}
