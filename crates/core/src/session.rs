//! Session - single owner of a world and the policy that drives it.

use gridwalk_types::WorldCommand;

use crate::config::WorldConfig;
use crate::error::WorldError;
use crate::policy::{MoveOutcome, WorldPolicy};
use crate::world::World;

/// Owns a [`World`] and its [`WorldPolicy`].
///
/// All mutation goes through [`Session::apply`], which takes `&mut self`, so a
/// command's effects (position commit, contact, respawn, recenter) land as one
/// unit with respect to anything reading the world through the same owner.
#[derive(Debug, Clone)]
pub struct Session<P> {
    world: World,
    policy: P,
    moves: u64,
    collected: u64,
}

impl<P: WorldPolicy> Session<P> {
    /// Wrap a world and let the policy place its initial entities.
    pub fn new(mut world: World, mut policy: P) -> Result<Self, WorldError> {
        policy.setup(&mut world)?;
        Ok(Self {
            world,
            policy,
            moves: 0,
            collected: 0,
        })
    }

    /// Build the sample terrain from `config` and start a session on it.
    pub fn from_config(config: &WorldConfig, policy: P) -> Result<Self, WorldError> {
        Self::new(World::new(config)?, policy)
    }

    pub fn apply(&mut self, command: WorldCommand) -> MoveOutcome {
        let outcome = self.policy.apply(&mut self.world, command);
        if let MoveOutcome::Moved(report) = &outcome {
            self.moves += 1;
            self.collected += report.collected.len() as u64;
            tracing::debug!(
                command = command.as_str(),
                x = report.to.x,
                y = report.to.y,
                "player moved"
            );
        }
        outcome
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Successful moves so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Pickups collected so far.
    pub fn collected(&self) -> u64 {
        self.collected
    }
}
