//! Ray-based line-of-sight query.

use glam::Vec3;

use crate::env::PhysicsQuery;
use crate::state::EntityId;

/// Check whether an unobstructed line exists from `source` to `destination`.
///
/// Every intersection along the segment is examined, not just the nearest.
/// A hit blocks the line unless one of these holds:
/// - the collider does not block shots,
/// - its resolved owner (physics body, else collider owner) is in `ignore`,
/// - the hit point lies within `tolerance` of `destination`, which lets the
///   target's own collision volume graze the ray.
///
/// A zero-length segment is always clear.
pub fn has_line_of_sight(
    physics: &dyn PhysicsQuery,
    source: Vec3,
    destination: Vec3,
    ignore: &[EntityId],
    tolerance: f32,
) -> bool {
    let delta = destination - source;
    let length = delta.length();
    let Some(direction) = delta.try_normalize() else {
        return true;
    };

    physics
        .raycast_all(source, direction, length)
        .iter()
        .all(|hit| {
            !hit.collider.blocks_shots()
                || ignore.contains(&hit.collider.resolved_owner())
                || hit.point.distance(destination) <= tolerance
        })
}
