//! Range-and-occlusion vision for sandbox units.

use std::collections::BTreeMap;

use combat_core::{
    Entity, EntityId, EntityRegistry, PhysicsQuery, StaticVision, has_line_of_sight,
};
use glam::Vec3;

use super::physics::{BODY_CENTER_HEIGHT, BODY_RADIUS};

/// Builds each unit's per-frame visibility snapshot.
///
/// A body is visible when it lies within range and nothing that blocks shots
/// stands between the observer's eyes and it. Units never see their own
/// projectiles.
#[derive(Clone, Debug)]
pub struct SandboxVision {
    range: f32,
    eye_height: f32,
    last_projectile_seen: BTreeMap<EntityId, f32>,
}

impl SandboxVision {
    pub fn new(range: f32, eye_height: f32) -> Self {
        Self {
            range,
            eye_height,
            last_projectile_seen: BTreeMap::new(),
        }
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    /// Scans the registry from `observer`'s eyes at time `now`.
    ///
    /// Returns a blind snapshot if `observer` is not a live unit.
    pub fn observe(
        &mut self,
        observer: EntityId,
        registry: &EntityRegistry,
        physics: &dyn PhysicsQuery,
        now: f32,
    ) -> StaticVision {
        let Some(unit) = registry.unit(observer) else {
            return StaticVision::blind();
        };
        let eye = unit.position + Vec3::Y * self.eye_height;

        let mut visibles = Vec::new();
        let mut saw_projectile = false;
        for (id, entity) in registry.iter() {
            if id == observer {
                continue;
            }
            let target = match entity {
                Entity::Unit(other) => other.position + Vec3::Y * BODY_CENTER_HEIGHT,
                Entity::Projectile(projectile) if projectile.shooter == Some(observer) => {
                    continue;
                }
                Entity::Projectile(projectile) => projectile.position,
            };
            if eye.distance(target) > self.range
                || !has_line_of_sight(physics, eye, target, &[observer, id], BODY_RADIUS)
            {
                continue;
            }
            saw_projectile |= matches!(entity, Entity::Projectile(_));
            visibles.push(id);
        }

        if saw_projectile {
            self.last_projectile_seen.insert(observer, now);
        }

        StaticVision {
            visibles,
            last_projectile_seen_time: self
                .last_projectile_seen
                .get(&observer)
                .copied()
                .unwrap_or(f32::NEG_INFINITY),
        }
    }

    /// Drops bookkeeping for `observer`.
    pub fn forget(&mut self, observer: EntityId) {
        self.last_projectile_seen.remove(&observer);
    }
}

#[cfg(test)]
mod tests {
    use combat_core::{ColliderTags, Projectile, Team, Unit, VisionSensor};

    use super::*;
    use crate::sandbox::ArenaPhysics;

    fn setup() -> (EntityRegistry, ArenaPhysics, EntityId) {
        let mut registry = EntityRegistry::new();
        let observer = registry.spawn_unit(Unit::new(Team(0), Vec3::ZERO));
        (registry, ArenaPhysics::new(), observer)
    }

    #[test]
    fn sees_units_in_range_only() {
        let (mut registry, mut physics, observer) = setup();
        let near = registry.spawn_unit(Unit::new(Team(1), Vec3::new(10.0, 0.0, 0.0)));
        registry.spawn_unit(Unit::new(Team(1), Vec3::new(200.0, 0.0, 0.0)));
        physics.sync_bodies(&registry);

        let mut vision = SandboxVision::new(80.0, 1.5);
        let snapshot = vision.observe(observer, &registry, &physics, 0.0);

        assert_eq!(snapshot.visibles(), &[near]);
    }

    #[test]
    fn walls_hide_units() {
        let (mut registry, mut physics, observer) = setup();
        registry.spawn_unit(Unit::new(Team(1), Vec3::new(10.0, 0.0, 0.0)));
        physics.add_wall(
            Vec3::new(5.0, 0.0, -3.0),
            Vec3::new(6.0, 4.0, 3.0),
            ColliderTags::BLOCKS_SHOTS,
        );
        physics.sync_bodies(&registry);

        let mut vision = SandboxVision::new(80.0, 1.5);
        let snapshot = vision.observe(observer, &registry, &physics, 0.0);

        assert!(snapshot.visibles().is_empty());
    }

    #[test]
    fn projectile_sightings_are_remembered() {
        let (mut registry, mut physics, observer) = setup();
        let enemy = registry.spawn_unit(Unit::new(Team(1), Vec3::new(20.0, 0.0, 0.0)));
        let own = registry.spawn_projectile(Projectile::new(
            observer,
            Vec3::new(1.0, 1.5, 0.0),
            Vec3::X,
        ));
        physics.sync_bodies(&registry);
        let mut vision = SandboxVision::new(80.0, 1.5);

        let first = vision.observe(observer, &registry, &physics, 1.0);
        assert_eq!(first.last_projectile_seen_time(), f32::NEG_INFINITY);
        assert!(!first.visibles().contains(&own));

        let incoming = registry.spawn_projectile(Projectile::new(
            enemy,
            Vec3::new(5.0, 1.5, 4.0),
            Vec3::NEG_X,
        ));
        let second = vision.observe(observer, &registry, &physics, 2.0);
        assert!(second.visibles().contains(&incoming));
        assert_eq!(second.last_projectile_seen_time(), 2.0);

        registry.despawn(incoming);
        let third = vision.observe(observer, &registry, &physics, 3.0);
        assert_eq!(third.last_projectile_seen_time(), 2.0);
    }

    #[test]
    fn dead_observer_is_blind() {
        let (mut registry, physics, observer) = setup();
        registry.despawn(observer);
        let mut vision = SandboxVision::new(80.0, 1.5);
        assert_eq!(
            vision.observe(observer, &registry, &physics, 0.0),
            StaticVision::blind()
        );
    }
}
