use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::core::models::{Entity, Vec2};

/// Sparse position -> entity map. A cell holds at most one entity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityMap {
    entities: BTreeMap<Vec2, Entity>,
}

impl EntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: &Vec2) -> Option<&Entity> {
        self.entities.get(pos)
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.entities.contains_key(pos)
    }

    /// Places `entity` at `pos`. Hands the entity back if the cell is already taken.
    pub fn insert(&mut self, pos: Vec2, entity: Entity) -> Result<(), Entity> {
        match self.entities.entry(pos) {
            Entry::Occupied(_) => Err(entity),
            Entry::Vacant(slot) => {
                slot.insert(entity);
                Ok(())
            }
        }
    }

    pub fn remove(&mut self, pos: &Vec2) -> Option<Entity> {
        self.entities.remove(pos)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Vec2, &Entity)> {
        self.entities.iter()
    }

    pub fn crates(&self) -> impl Iterator<Item = (&Vec2, &Entity)> {
        self.entities
            .iter()
            .filter(|(_, entity)| matches!(entity, Entity::Crate { .. }))
    }
}
