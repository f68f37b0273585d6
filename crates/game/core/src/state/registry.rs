use std::collections::BTreeMap;

use crate::state::{Entity, EntityId, Projectile, Unit};

/// Owner of every live unit and projectile.
///
/// Entities are kept in id order so iteration is deterministic. Ids come
/// from a monotonically increasing allocator and are never reused.
#[derive(Clone, Debug, Default)]
pub struct EntityRegistry {
    next_id: u32,
    entities: BTreeMap<EntityId, Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = self.allocate();
        self.entities.insert(id, entity);
        id
    }

    pub fn spawn_unit(&mut self, unit: Unit) -> EntityId {
        self.spawn(Entity::Unit(unit))
    }

    pub fn spawn_projectile(&mut self, projectile: Projectile) -> EntityId {
        self.spawn(Entity::Projectile(projectile))
    }

    /// Removes an entity. Outstanding ids to it stop resolving immediately.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Filters a weak reference down to a live one.
    pub fn live(&self, id: Option<EntityId>) -> Option<EntityId> {
        id.filter(|id| self.is_alive(*id))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn unit(&self, id: EntityId) -> Option<&Unit> {
        self.get(id).and_then(Entity::as_unit)
    }

    pub fn unit_mut(&mut self, id: EntityId) -> Option<&mut Unit> {
        match self.entities.get_mut(&id) {
            Some(Entity::Unit(unit)) => Some(unit),
            _ => None,
        }
    }

    pub fn projectile(&self, id: EntityId) -> Option<&Projectile> {
        self.get(id).and_then(Entity::as_projectile)
    }

    pub fn projectile_mut(&mut self, id: EntityId) -> Option<&mut Projectile> {
        match self.entities.get_mut(&id) {
            Some(Entity::Projectile(projectile)) => Some(projectile),
            _ => None,
        }
    }

    /// Resolves a body to the combatant responsible for it.
    ///
    /// A unit resolves to itself; a projectile resolves to its shooter if that
    /// shooter is still alive. Anything else resolves to nothing.
    pub fn resolve_combatant(&self, id: EntityId) -> Option<(EntityId, &Unit)> {
        match self.get(id)? {
            Entity::Unit(unit) => Some((id, unit)),
            Entity::Projectile(projectile) => {
                let shooter = projectile.shooter?;
                self.unit(shooter).map(|unit| (shooter, unit))
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(id, entity)| (*id, entity))
    }

    pub fn units(&self) -> impl Iterator<Item = (EntityId, &Unit)> {
        self.iter()
            .filter_map(|(id, entity)| entity.as_unit().map(|unit| (id, unit)))
    }

    pub fn units_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Unit)> {
        self.entities
            .iter_mut()
            .filter_map(|(id, entity)| match entity {
                Entity::Unit(unit) => Some((*id, unit)),
                Entity::Projectile(_) => None,
            })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
