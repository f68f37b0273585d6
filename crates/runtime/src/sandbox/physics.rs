//! Ray queries against boxes and unit spheres.

use combat_core::{ColliderRef, ColliderTags, EntityId, EntityRegistry, PhysicsQuery, RayHit};
use glam::Vec3;

/// First id handed to scenery so it never collides with registry ids.
pub const SCENERY_ID_BASE: u32 = 0x8000_0000;

/// Radius of the sphere standing in for a unit's body.
pub const BODY_RADIUS: f32 = 1.0;

/// Height of a unit's body center above its position.
pub const BODY_CENTER_HEIGHT: f32 = 1.0;

/// Axis-aligned box of static scenery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub min: Vec3,
    pub max: Vec3,
    pub collider: ColliderRef,
}

impl Wall {
    /// Distance along the ray to the box, zero when starting inside.
    fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let mut entry = 0.0_f32;
        let mut exit = f32::INFINITY;
        for axis in 0..3 {
            let (start, step) = (origin[axis], direction[axis]);
            let (low, high) = (self.min[axis], self.max[axis]);
            if step.abs() < f32::EPSILON {
                // Parallel to this slab: inside it or never.
                if start < low || start > high {
                    return None;
                }
                continue;
            }
            let (near, far) = ((low - start) / step, (high - start) / step);
            entry = entry.max(near.min(far));
            exit = exit.min(near.max(far));
            if entry > exit {
                return None;
            }
        }
        Some(entry)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Body {
    center: Vec3,
    collider: ColliderRef,
}

impl Body {
    fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let offset = origin - self.center;
        let b = offset.dot(direction);
        let c = offset.length_squared() - BODY_RADIUS * BODY_RADIUS;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        [-b - root, -b + root].into_iter().find(|t| *t >= 0.0)
    }
}

/// Static walls plus one sphere per live unit.
///
/// Unit spheres are a snapshot; call [`ArenaPhysics::sync_bodies`] after
/// units move.
#[derive(Clone, Debug, Default)]
pub struct ArenaPhysics {
    walls: Vec<Wall>,
    bodies: Vec<Body>,
}

impl ArenaPhysics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a wall spanning `min..max` and returns its scenery id.
    pub fn add_wall(&mut self, min: Vec3, max: Vec3, tags: ColliderTags) -> EntityId {
        let id = EntityId(SCENERY_ID_BASE + self.walls.len() as u32);
        self.walls.push(Wall {
            min: min.min(max),
            max: min.max(max),
            collider: ColliderRef::new(id, tags),
        });
        id
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Rebuilds unit spheres from the registry.
    pub fn sync_bodies(&mut self, registry: &EntityRegistry) {
        self.bodies = registry
            .units()
            .map(|(id, unit)| Body {
                center: unit.position + Vec3::Y * BODY_CENTER_HEIGHT,
                collider: ColliderRef::new(id, ColliderTags::BLOCKS_SHOTS),
            })
            .collect();
    }
}

impl PhysicsQuery for ArenaPhysics {
    fn raycast_all(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Vec<RayHit> {
        let wall_hits = self
            .walls
            .iter()
            .filter_map(|wall| Some((wall.intersect(origin, direction)?, wall.collider)));
        let body_hits = self
            .bodies
            .iter()
            .filter_map(|body| Some((body.intersect(origin, direction)?, body.collider)));

        let mut hits: Vec<RayHit> = wall_hits
            .chain(body_hits)
            .filter(|(distance, _)| *distance <= max_distance)
            .map(|(distance, collider)| RayHit {
                point: origin + direction * distance,
                distance,
                collider,
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

#[cfg(test)]
mod tests {
    use combat_core::{Team, Unit, has_line_of_sight};

    use super::*;

    #[test]
    fn wall_between_points_blocks() {
        let mut physics = ArenaPhysics::new();
        physics.add_wall(
            Vec3::new(5.0, 0.0, -5.0),
            Vec3::new(5.5, 3.0, 5.0),
            ColliderTags::BLOCKS_SHOTS,
        );
        let target = Vec3::new(10.0, 1.0, 0.0);

        let hits = physics.raycast_all(Vec3::new(0.0, 1.0, 0.0), Vec3::X, 10.0);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].distance, 5.0);
        assert!(!has_line_of_sight(&physics, Vec3::Y, target, &[], 2.0));
    }

    #[test]
    fn decorative_wall_is_transparent_to_line_of_sight() {
        let mut physics = ArenaPhysics::new();
        physics.add_wall(
            Vec3::new(5.0, 0.0, -5.0),
            Vec3::new(5.5, 3.0, 5.0),
            ColliderTags::DECORATIVE,
        );

        assert!(has_line_of_sight(
            &physics,
            Vec3::Y,
            Vec3::new(10.0, 1.0, 0.0),
            &[],
            2.0
        ));
    }

    #[test]
    fn hits_are_sorted_and_limited_by_range() {
        let mut registry = EntityRegistry::new();
        let near = registry.spawn_unit(Unit::new(Team(0), Vec3::new(3.0, 0.0, 0.0)));
        registry.spawn_unit(Unit::new(Team(0), Vec3::new(30.0, 0.0, 0.0)));
        let mut physics = ArenaPhysics::new();
        let wall = physics.add_wall(
            Vec3::new(8.0, 0.0, -1.0),
            Vec3::new(9.0, 3.0, 1.0),
            ColliderTags::BLOCKS_SHOTS,
        );
        physics.sync_bodies(&registry);

        let hits = physics.raycast_all(Vec3::new(0.0, 1.0, 0.0), Vec3::X, 20.0);

        let owners: Vec<_> = hits.iter().map(|hit| hit.collider.owner).collect();
        assert_eq!(owners, vec![near, wall]);
        assert_eq!(hits[0].distance, 2.0);
    }

    #[test]
    fn scenery_ids_do_not_overlap_units() {
        let mut physics = ArenaPhysics::new();
        let id = physics.add_wall(Vec3::ZERO, Vec3::ONE, ColliderTags::BLOCKS_SHOTS);
        assert_eq!(id, EntityId(SCENERY_ID_BASE));
    }
}
