//! Rule sets that drive a world.
//!
//! A policy only sees the world through [`WorldSurface`], so the projection
//! engine never has to change when the rules do.

use gridwalk_types::{Position, WorldCommand, FLOOR};

use crate::entity::{EntityId, EntityKind};
use crate::error::WorldError;
use crate::rng::SimpleRng;
use crate::world::WorldSurface;

/// Random draws tried before falling back to a scan of the interior.
const SPAWN_ATTEMPTS: u32 = 32;

/// A rule set applied to a world.
pub trait WorldPolicy {
    /// Place the initial entities. Called once, before any command.
    fn setup<W: WorldSurface>(&mut self, world: &mut W) -> Result<(), WorldError>;

    /// Apply one command. Rejected commands leave the world untouched.
    fn apply<W: WorldSurface>(&mut self, world: &mut W, command: WorldCommand) -> MoveOutcome;
}

/// What a movement command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Target cell was outside the world or not walkable.
    Blocked,
    Moved(MoveReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub to: Position,
    /// Pickups removed because the player landed on them.
    pub collected: Vec<EntityId>,
    /// Replacement pickups, one per collected pickup that found a free cell.
    pub spawned: Vec<EntityId>,
}

impl MoveOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked)
    }
}

/// The sample rules: a player walking on floor, one pickup that respawns
/// somewhere else whenever it is collected.
#[derive(Debug, Clone)]
pub struct SampleRules {
    rng: SimpleRng,
    player: Option<EntityId>,
}

impl SampleRules {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            player: None,
        }
    }

    pub fn player(&self) -> Option<EntityId> {
        self.player
    }

    /// Only floor is walkable. Anything outside the world is not.
    pub fn is_walkable<W: WorldSurface>(world: &W, pos: Position) -> bool {
        let inside = pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < world.columns()
            && (pos.y as usize) < world.rows();
        inside && world.terrain(pos) == Some(FLOOR)
    }

    fn is_free<W: WorldSurface>(world: &W, pos: Position) -> bool {
        Self::is_walkable(world, pos) && !world.is_occupied(pos)
    }

    /// The walkable cell closest to `origin`, searched ring by ring.
    fn nearest_walkable<W: WorldSurface>(world: &W, origin: Position) -> Option<Position> {
        let reach = world.columns().max(world.rows()) as i32;
        (0..=reach).find_map(|r| {
            (-r..=r)
                .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
                .filter(|&(dx, dy)| dx.abs().max(dy.abs()) == r)
                .map(|(dx, dy)| Position::new(origin.x + dx, origin.y + dy))
                .find(|&pos| Self::is_walkable(world, pos))
        })
    }

    /// Pick a walkable, unoccupied interior cell for a new pickup.
    fn pick_spawn_cell<W: WorldSurface>(&mut self, world: &W) -> Option<Position> {
        let (w, h) = (world.columns() as i32, world.rows() as i32);

        for _ in 0..SPAWN_ATTEMPTS {
            let pos = Position::new(self.rng.range(1, w - 1), self.rng.range(1, h - 1));
            if Self::is_free(world, pos) {
                return Some(pos);
            }
        }

        // Crowded interior: scan every interior cell from a random start.
        let inner_w = w - 2;
        let total = inner_w * (h - 2);
        let start = self.rng.range(0, total);
        (0..total)
            .map(|i| (start + i) % total)
            .map(|i| Position::new(1 + i % inner_w, 1 + i / inner_w))
            .find(|&pos| Self::is_free(world, pos))
    }

    fn spawn_pickup<W: WorldSurface>(&mut self, world: &mut W) -> Option<EntityId> {
        let Some(pos) = self.pick_spawn_cell(world) else {
            tracing::warn!("no free interior cell left for a pickup");
            return None;
        };
        match world.spawn(EntityKind::Pickup, pos) {
            Ok(id) => {
                tracing::debug!(x = pos.x, y = pos.y, id = id.0, "pickup spawned");
                Some(id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "pickup spawn rejected");
                None
            }
        }
    }
}

impl WorldPolicy for SampleRules {
    fn setup<W: WorldSurface>(&mut self, world: &mut W) -> Result<(), WorldError> {
        let centre = Position::new((world.columns() / 2) as i32, (world.rows() / 2) as i32);
        let start = Self::nearest_walkable(world, centre).ok_or(WorldError::NoWalkableCell)?;
        let id = world.spawn(EntityKind::Player, start)?;
        self.player = Some(id);
        world.center_viewport_on(start);
        self.spawn_pickup(world);
        Ok(())
    }

    fn apply<W: WorldSurface>(&mut self, world: &mut W, command: WorldCommand) -> MoveOutcome {
        let WorldCommand::Move(direction) = command;

        let Some(player) = self.player else {
            return MoveOutcome::Blocked;
        };
        let Some(current) = world.registry().get(player).map(|e| e.position) else {
            return MoveOutcome::Blocked;
        };

        let target = current.step(direction);
        if !Self::is_walkable(world, target) {
            return MoveOutcome::Blocked;
        }
        if world.relocate(player, target).is_err() {
            return MoveOutcome::Blocked;
        }

        let touched: Vec<EntityId> = world
            .registry()
            .at(target)
            .filter(|e| e.kind == EntityKind::Pickup)
            .map(|e| e.id)
            .collect();

        let mut spawned = Vec::with_capacity(touched.len());
        for &id in &touched {
            world.despawn(id);
            tracing::debug!(id = id.0, "pickup collected");
            if let Some(new_id) = self.spawn_pickup(world) {
                spawned.push(new_id);
            }
        }

        world.center_viewport_on(target);

        MoveOutcome::Moved(MoveReport {
            to: target,
            collected: touched,
            spawned,
        })
    }
}
