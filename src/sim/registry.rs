//! Entity registry - the single owner of every live entity
//!
//! Entities are stored in insertion order. Ids are allocated monotonically,
//! so insertion order is id order and lookups are a binary search. Removing
//! an entity never touches the handles of the survivors.

use super::entity::{Entity, EntityId, EntityTag};

#[derive(Debug, Clone)]
pub struct Registry {
    entities: Vec<Entity>,
    next_id: u32,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            // 0 is the unassigned id
            next_id: 1,
        }
    }

    /// Take ownership of an entity and hand back its handle
    pub fn spawn(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        entity.id = id;
        log::debug!("spawn {} {:?}", id, entity.tag());
        self.entities.push(entity);
        id
    }

    /// Remove an entity. Returns None if the handle is already dead.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.index_of(id)?;
        log::debug!("despawn {}", id);
        Some(self.entities.remove(index))
    }

    /// Drop every entity. Handle allocation keeps counting.
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index_of(id).map(|i| &self.entities[i])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.index_of(id).map(|i| &mut self.entities[i])
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Live entities in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Handles of the current population, for mutation-safe iteration
    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(|e| e.id).collect()
    }

    pub fn iter_tagged(&self, tag: EntityTag) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.tag() == tag)
    }

    pub fn asteroids(&self) -> impl Iterator<Item = &Entity> {
        self.iter_tagged(EntityTag::Asteroid)
    }

    pub fn count_tagged(&self, tag: EntityTag) -> usize {
        self.iter_tagged(tag).count()
    }

    /// The first ship in registry order
    pub fn ship_id(&self) -> Option<EntityId> {
        self.iter_tagged(EntityTag::Ship).next().map(|e| e.id)
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.binary_search_by_key(&id, |e| e.id).ok()
    }
}
