//! Enemy selection with a refresh cooldown.

use crate::config::AcquisitionConfig;
use crate::state::{EntityId, EntityRegistry, Unit};

/// Which enemy a unit currently engages, and when that was decided.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetAcquisition {
    enemy: Option<EntityId>,
    last_acquisition_time: f32,
}

impl Default for TargetAcquisition {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetAcquisition {
    pub fn new() -> Self {
        Self {
            enemy: None,
            last_acquisition_time: f32::NEG_INFINITY,
        }
    }

    /// The acquired enemy if it is still alive.
    pub fn enemy(&self, registry: &EntityRegistry) -> Option<EntityId> {
        registry.live(self.enemy)
    }

    pub fn last_acquisition_time(&self) -> f32 {
        self.last_acquisition_time
    }

    /// Re-evaluates the enemy of `self_id` unless the cooldown is running.
    ///
    /// While `now - last_acquisition_time <= config.cooldown` the previous
    /// answer is returned unchanged. Otherwise the first match wins:
    ///
    /// 1. the live shooter that hit us within `config.engagement_memory`,
    ///    when it is on another team;
    /// 2. the first entry of `visibles` that resolves to a cross-team
    ///    combatant (projectiles resolve to their shooter);
    /// 3. nobody.
    pub fn acquire(
        &mut self,
        now: f32,
        self_id: EntityId,
        registry: &EntityRegistry,
        visibles: &[EntityId],
        config: &AcquisitionConfig,
    ) -> Option<EntityId> {
        if now - self.last_acquisition_time <= config.cooldown {
            return self.enemy(registry);
        }

        self.enemy = registry
            .unit(self_id)
            .and_then(|me| Self::select(now, me, registry, visibles, config));
        self.last_acquisition_time = now;
        self.enemy
    }

    /// Forgets the enemy and the unit's last shooter.
    pub fn clear(&mut self, registry: &mut EntityRegistry, self_id: EntityId) {
        self.enemy = None;
        if let Some(unit) = registry.unit_mut(self_id) {
            unit.shot_by = None;
        }
    }

    fn select(
        now: f32,
        me: &Unit,
        registry: &EntityRegistry,
        visibles: &[EntityId],
        config: &AcquisitionConfig,
    ) -> Option<EntityId> {
        let recent_shooter = me
            .shot_by
            .filter(|_| now - me.last_shot_time < config.engagement_memory)
            .and_then(|shooter| registry.unit(shooter).map(|unit| (shooter, unit)))
            .filter(|(_, unit)| unit.is_enemy_of(me))
            .map(|(shooter, _)| shooter);

        recent_shooter.or_else(|| {
            visibles.iter().find_map(|&body| {
                registry
                    .resolve_combatant(body)
                    .filter(|(_, unit)| unit.is_enemy_of(me))
                    .map(|(id, _)| id)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::state::{Projectile, Team};

    const RED: Team = Team(0);
    const BLUE: Team = Team(1);

    fn config() -> AcquisitionConfig {
        AcquisitionConfig::default()
    }

    fn spawn(registry: &mut EntityRegistry, team: Team) -> EntityId {
        registry.spawn_unit(Unit::new(team, Vec3::ZERO))
    }

    #[test]
    fn nobody_around_means_no_enemy() {
        let mut registry = EntityRegistry::new();
        let me = spawn(&mut registry, RED);
        let mut acquisition = TargetAcquisition::new();

        assert_eq!(acquisition.acquire(1.0, me, &registry, &[], &config()), None);
        assert_eq!(acquisition.last_acquisition_time(), 1.0);
    }

    #[test]
    fn first_visible_cross_team_unit_wins() {
        let mut registry = EntityRegistry::new();
        let me = spawn(&mut registry, RED);
        let friend = spawn(&mut registry, RED);
        let first = spawn(&mut registry, BLUE);
        let second = spawn(&mut registry, BLUE);
        let mut acquisition = TargetAcquisition::new();

        let enemy = acquisition.acquire(1.0, me, &registry, &[friend, first, second], &config());

        assert_eq!(enemy, Some(first));
    }

    #[test]
    fn recent_shooter_takes_precedence_over_visibles() {
        let mut registry = EntityRegistry::new();
        let me = spawn(&mut registry, RED);
        let visible = spawn(&mut registry, BLUE);
        let shooter = spawn(&mut registry, BLUE);
        registry
            .unit_mut(me)
            .unwrap()
            .register_hit(Some(shooter), 0.5);
        let mut acquisition = TargetAcquisition::new();

        let enemy = acquisition.acquire(1.0, me, &registry, &[visible], &config());

        assert_eq!(enemy, Some(shooter));
    }

    #[test]
    fn old_or_friendly_shooters_are_ignored() {
        let mut registry = EntityRegistry::new();
        let me = spawn(&mut registry, RED);
        let visible = spawn(&mut registry, BLUE);
        let shooter = spawn(&mut registry, BLUE);
        let friend = spawn(&mut registry, RED);

        registry
            .unit_mut(me)
            .unwrap()
            .register_hit(Some(shooter), 0.0);
        let mut stale = TargetAcquisition::new();
        assert_eq!(
            stale.acquire(1.0, me, &registry, &[visible], &config()),
            Some(visible)
        );

        registry
            .unit_mut(me)
            .unwrap()
            .register_hit(Some(friend), 0.9);
        let mut friendly = TargetAcquisition::new();
        assert_eq!(
            friendly.acquire(1.0, me, &registry, &[visible], &config()),
            Some(visible)
        );
    }

    #[test]
    fn projectiles_resolve_to_their_shooter() {
        let mut registry = EntityRegistry::new();
        let me = spawn(&mut registry, RED);
        let friend = spawn(&mut registry, RED);
        let foe = spawn(&mut registry, BLUE);
        let friendly_round =
            registry.spawn_projectile(Projectile::new(friend, Vec3::ONE, Vec3::X));
        let hostile_round = registry.spawn_projectile(Projectile::new(foe, Vec3::ONE, Vec3::X));
        let mut acquisition = TargetAcquisition::new();

        let enemy = acquisition.acquire(
            1.0,
            me,
            &registry,
            &[friendly_round, hostile_round],
            &config(),
        );

        assert_eq!(enemy, Some(foe));
    }

    #[test]
    fn cooldown_returns_identical_answer() {
        let mut registry = EntityRegistry::new();
        let me = spawn(&mut registry, RED);
        let first = spawn(&mut registry, BLUE);
        let second = spawn(&mut registry, BLUE);
        let mut acquisition = TargetAcquisition::new();

        assert_eq!(acquisition.acquire(1.0, me, &registry, &[first], &config()), Some(first));
        assert_eq!(acquisition.acquire(1.3, me, &registry, &[second], &config()), Some(first));
        assert_eq!(acquisition.acquire(1.5, me, &registry, &[], &config()), Some(first));
        assert_eq!(acquisition.last_acquisition_time(), 1.0);

        assert_eq!(acquisition.acquire(1.6, me, &registry, &[second], &config()), Some(second));
    }

    #[test]
    fn stale_ids_are_skipped_and_never_returned() {
        let mut registry = EntityRegistry::new();
        let me = spawn(&mut registry, RED);
        let gone = spawn(&mut registry, BLUE);
        let alive = spawn(&mut registry, BLUE);
        let mut acquisition = TargetAcquisition::new();

        assert_eq!(acquisition.acquire(1.0, me, &registry, &[gone], &config()), Some(gone));
        registry.despawn(gone);

        assert_eq!(acquisition.enemy(&registry), None);
        assert_eq!(acquisition.acquire(1.2, me, &registry, &[gone], &config()), None);
        assert_eq!(
            acquisition.acquire(2.0, me, &registry, &[gone, alive], &config()),
            Some(alive)
        );
    }

    #[test]
    fn clear_drops_enemy_and_shooter() {
        let mut registry = EntityRegistry::new();
        let me = spawn(&mut registry, RED);
        let shooter = spawn(&mut registry, BLUE);
        registry
            .unit_mut(me)
            .unwrap()
            .register_hit(Some(shooter), 0.9);
        let mut acquisition = TargetAcquisition::new();
        acquisition.acquire(1.0, me, &registry, &[], &config());

        acquisition.clear(&mut registry, me);

        assert_eq!(acquisition.enemy(&registry), None);
        assert_eq!(registry.unit(me).unwrap().shot_by, None);
    }
}
