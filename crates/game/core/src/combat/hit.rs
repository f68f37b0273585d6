//! Projectile impacts.

use crate::error::RegistryError;
use crate::state::{EntityId, EntityRegistry};

/// What an impact did to its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitReport {
    pub target: EntityId,
    /// Shooter credited with the hit, if it is still alive.
    pub shooter: Option<EntityId>,
    pub remaining_health: f32,
}

impl HitReport {
    pub fn is_lethal(&self) -> bool {
        self.remaining_health <= 0.0
    }
}

/// Applies the impact of `projectile` on `target` at time `now`.
///
/// The target remembers the projectile's live shooter and the time of the
/// hit, then loses `damage` health. The projectile is consumed.
///
/// # Errors
///
/// Returns [`RegistryError`] if either id is gone or names the wrong kind of
/// entity. Nothing is mutated in that case.
pub fn apply_projectile_hit(
    registry: &mut EntityRegistry,
    target: EntityId,
    projectile: EntityId,
    now: f32,
    damage: f32,
) -> Result<HitReport, RegistryError> {
    let shooter = match registry.get(projectile) {
        None => return Err(RegistryError::UnknownEntity(projectile)),
        Some(entity) => entity
            .as_projectile()
            .ok_or(RegistryError::NotAProjectile(projectile))?
            .shooter,
    };
    let shooter = registry.live(shooter);

    if !registry.is_alive(target) {
        return Err(RegistryError::UnknownEntity(target));
    }
    let unit = registry
        .unit_mut(target)
        .ok_or(RegistryError::NotAUnit(target))?;
    unit.register_hit(shooter, now);
    let remaining_health = unit.health.apply_damage(damage);

    registry.despawn(projectile);

    Ok(HitReport {
        target,
        shooter,
        remaining_health,
    })
}
