//! Entities and the ordered registry that holds them.
//!
//! Registry order is draw order: when two entities share a cell, the one
//! inserted later is the one shown.

use gridwalk_types::{Position, PICKUP_ICON, PLAYER_ICON};

/// Stable identity of an entity. Ids are never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Entity variants known to the sample rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Pickup,
}

impl EntityKind {
    pub fn icon(&self) -> char {
        match self {
            EntityKind::Player => PLAYER_ICON,
            EntityKind::Pickup => PICKUP_ICON,
        }
    }
}

/// A positioned, iconised object drawn on top of the terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub icon: char,
    pub position: Position,
}

/// Ordered collection of entities.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
    next_id: u32,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity (drawn above everything already present).
    ///
    /// Bounds are the caller's job; [`crate::World`] checks them before
    /// forwarding here.
    pub(crate) fn push(&mut self, kind: EntityKind, position: Position) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(Entity {
            id,
            kind,
            icon: kind.icon(),
            position,
        });
        id
    }

    /// Remove an entity, keeping the relative order of the rest.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Entities in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Entities standing on `pos`, in draw order.
    pub fn at(&self, pos: Position) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.position == pos)
    }

    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.kind == kind)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.at(pos).next().is_some()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut reg = EntityRegistry::new();
        let a = reg.push(EntityKind::Pickup, Position::new(1, 1));
        reg.remove(a);
        let b = reg.push(EntityKind::Pickup, Position::new(1, 1));
        assert_ne!(a, b);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn removal_keeps_draw_order() {
        let mut reg = EntityRegistry::new();
        let a = reg.push(EntityKind::Player, Position::new(1, 1));
        let b = reg.push(EntityKind::Pickup, Position::new(2, 1));
        let c = reg.push(EntityKind::Pickup, Position::new(3, 1));
        assert_eq!(reg.remove(b).map(|e| e.id), Some(b));
        let order: Vec<_> = reg.iter().map(|e| e.id).collect();
        assert_eq!(order, vec![a, c]);
        assert!(reg.remove(b).is_none());
    }

    #[test]
    fn lookup_by_cell_and_kind() {
        let mut reg = EntityRegistry::new();
        reg.push(EntityKind::Player, Position::new(1, 1));
        reg.push(EntityKind::Pickup, Position::new(1, 1));
        reg.push(EntityKind::Pickup, Position::new(4, 2));
        assert_eq!(reg.at(Position::new(1, 1)).count(), 2);
        assert_eq!(reg.of_kind(EntityKind::Pickup).count(), 2);
        assert!(reg.is_occupied(Position::new(4, 2)));
        assert!(!reg.is_occupied(Position::new(2, 2)));
    }

    #[test]
    fn icons_follow_kind() {
        let mut reg = EntityRegistry::new();
        let p = reg.push(EntityKind::Player, Position::new(0, 0));
        assert_eq!(reg.get(p).map(|e| e.icon), Some('@'));
    }
}
