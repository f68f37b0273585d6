//! Condition nodes for AI behavior trees.
//!
//! Condition nodes check the unit's situation and return Success or Failure.
//! They never queue commands. The visibility checks also refresh the
//! sighting bookkeeping in the brain, which is how "last seen" state stays
//! current.

use behavior_tree::{Behavior, Inspector, Status};
use combat_core::{EntityId, EntityRegistry, PerceptionState, VisionSensor, has_line_of_sight};

use crate::providers::ai::AiContext;

/// Succeeds while an acquired enemy is alive.
pub struct HasEnemy;

impl Behavior<AiContext<'_>> for HasEnemy {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        Status::from_bool(ctx.enemy().is_some())
    }
}

/// Succeeds when the acquired enemy was seen within the visibility window.
///
/// A sighting this frame refreshes the enemy's last known position. The
/// sighting is forgotten when the enemy is destroyed or cleared.
pub struct IsEnemyVisible;

impl Behavior<AiContext<'_>> for IsEnemyVisible {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let enemy = ctx.brain.acquisition.enemy(ctx.registry);
        let window = ctx.config.perception.visibility_window;
        Status::from_bool(refresh_sighting(
            &mut ctx.brain.enemy_sighting,
            enemy,
            ctx.now,
            window,
            ctx.registry,
            ctx.vision,
        ))
    }
}

/// [`IsEnemyVisible`] for the designated player instead of the enemy.
pub struct SeePlayer;

impl Behavior<AiContext<'_>> for SeePlayer {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let player = ctx.registry.live(ctx.brain.player);
        let window = ctx.config.perception.visibility_window;
        Status::from_bool(refresh_sighting(
            &mut ctx.brain.player_sighting,
            player,
            ctx.now,
            window,
            ctx.registry,
            ctx.vision,
        ))
    }
}

/// Succeeds when the acquired enemy still has ammunition.
pub struct EnemyHasAmmo;

impl Behavior<AiContext<'_>> for EnemyHasAmmo {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        Status::from_bool(ctx.enemy().is_some_and(|(_, enemy)| enemy.ammo > 0))
    }
}

/// Succeeds when the unit's health is strictly below `health` points.
pub struct IsHealthLessThan {
    pub health: f32,
}

impl Behavior<AiContext<'_>> for IsHealthLessThan {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        Status::from_bool(ctx.me().is_some_and(|me| me.health.current() < self.health))
    }
}

/// Succeeds when the attacker can see the unit's current destination.
///
/// The attacker is the live last shooter, else the acquired enemy. Without
/// either the node fails.
pub struct HasLineOfSightAttackerDestination;

impl Behavior<AiContext<'_>> for HasLineOfSightAttackerDestination {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let Some((attacker, source)) = ctx.attacker() else {
            return Status::Failure;
        };
        let destination = ctx.agent.destination();
        Status::from_bool(has_line_of_sight(
            ctx.physics,
            source,
            destination,
            &[ctx.unit, attacker],
            ctx.config.perception.destination_tolerance,
        ))
    }
}

/// Succeeds when a projectile was seen less than `duration` seconds ago.
pub struct LastProjectileSeenWithin {
    pub duration: f32,
}

impl Behavior<AiContext<'_>> for LastProjectileSeenWithin {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let elapsed = ctx.now - ctx.vision.last_projectile_seen_time();
        if ctx.is_inspected() {
            ctx.set_debug_info(format!("t={elapsed:.2}"));
        }
        Status::from_bool(elapsed < self.duration)
    }
}

/// Records this frame's sighting of `tracked` and reports recency.
///
/// The sighting is forgotten once its entity is destroyed, and replaced when
/// a different entity is tracked. Having nothing to track this frame keeps
/// the sighting of a live entity.
fn refresh_sighting(
    sighting: &mut PerceptionState,
    tracked: Option<EntityId>,
    now: f32,
    window: f32,
    registry: &EntityRegistry,
    vision: &dyn VisionSensor,
) -> bool {
    if let Some(previous) = sighting.tracked().filter(|id| !registry.is_alive(*id)) {
        tracing::trace!(tracked = %previous, "sighting forgotten");
        sighting.forget();
    }
    let Some((id, position)) =
        tracked.and_then(|id| registry.get(id).map(|entity| (id, entity.position())))
    else {
        return false;
    };
    if sighting.tracked().is_some_and(|previous| previous != id) {
        sighting.forget();
    }
    sighting.record_visibility_tick(now, vision.visibles(), id, position);
    sighting.is_recently_seen(now, window)
}

#[cfg(test)]
mod tests {
    use behavior_tree::Inspect;
    use combat_core::{ColliderTags, NavigationAgent, StaticVision, Team, Unit};
    use glam::Vec3;

    use super::*;
    use crate::providers::ai::nodes::{AcquireEnemy, ClearEnemy};
    use crate::providers::ai::testing::Fixture;

    #[test]
    fn health_threshold_is_strict() {
        let mut fx = Fixture::new(Vec3::ZERO);
        let node = IsHealthLessThan { health: 1.0 };
        assert_eq!(fx.tick(&node, 0.0).status, Status::Failure);

        fx.me().health.apply_damage(99.0);
        assert_eq!(fx.tick(&node, 0.0).status, Status::Failure);

        fx.me().health.apply_damage(0.5);
        assert_eq!(fx.tick(&node, 0.0).status, Status::Success);
    }

    #[test]
    fn enemy_visibility_fades_after_the_window() {
        let mut fx = Fixture::new(Vec3::ZERO);
        let enemy = fx.spawn(Unit::new(Team(1), Vec3::new(0.0, 0.0, 15.0)));
        assert_eq!(fx.tick(&IsEnemyVisible, 0.0).status, Status::Failure);

        fx.vision = StaticVision::new(vec![enemy]);
        fx.tick(&AcquireEnemy, 0.0);
        assert_eq!(fx.tick(&HasEnemy, 0.0).status, Status::Success);
        assert_eq!(fx.tick(&IsEnemyVisible, 0.0).status, Status::Success);
        assert_eq!(
            fx.brain.enemy_sighting.last_known_position(),
            Some(Vec3::new(0.0, 0.0, 15.0))
        );

        fx.vision = StaticVision::blind();
        assert_eq!(fx.tick(&IsEnemyVisible, 0.4).status, Status::Success);
        assert_eq!(fx.tick(&IsEnemyVisible, 0.5).status, Status::Failure);
    }

    #[test]
    fn dead_enemy_is_forgotten() {
        let mut fx = Fixture::new(Vec3::ZERO);
        let enemy = fx.spawn(Unit::new(Team(1), Vec3::new(3.0, 0.0, 0.0)));
        fx.vision = StaticVision::new(vec![enemy]);
        fx.tick(&AcquireEnemy, 0.0);
        fx.tick(&IsEnemyVisible, 0.0);

        fx.registry.despawn(enemy);

        assert_eq!(fx.tick(&HasEnemy, 0.1).status, Status::Failure);
        assert_eq!(fx.tick(&IsEnemyVisible, 0.1).status, Status::Failure);
        assert_eq!(fx.brain.enemy_sighting.tracked(), None);
    }

    #[test]
    fn empty_acquisition_keeps_live_sighting() {
        let mut fx = Fixture::new(Vec3::ZERO);
        let enemy = fx.spawn(Unit::new(Team(1), Vec3::new(3.0, 0.0, 0.0)));
        fx.vision = StaticVision::new(vec![enemy]);
        fx.tick(&AcquireEnemy, 0.0);
        fx.tick(&IsEnemyVisible, 0.0);

        // Cooldown refresh that finds nobody.
        fx.vision = StaticVision::blind();
        fx.tick(&AcquireEnemy, 1.0);
        assert_eq!(fx.tick(&HasEnemy, 1.0).status, Status::Failure);
        assert_eq!(fx.tick(&IsEnemyVisible, 1.0).status, Status::Failure);

        assert_eq!(fx.brain.enemy_sighting.tracked(), Some(enemy));
        assert_eq!(fx.brain.enemy_sighting.last_seen_time(), 0.0);
        assert_eq!(
            fx.brain.enemy_sighting.last_known_position(),
            Some(Vec3::new(3.0, 0.0, 0.0))
        );
    }

    #[test]
    fn clear_enemy_forgets_sighting() {
        let mut fx = Fixture::new(Vec3::ZERO);
        let enemy = fx.spawn(Unit::new(Team(1), Vec3::new(3.0, 0.0, 0.0)));
        fx.vision = StaticVision::new(vec![enemy]);
        fx.tick(&AcquireEnemy, 0.0);
        fx.tick(&IsEnemyVisible, 0.0);

        fx.tick(&ClearEnemy, 0.1);

        assert_eq!(fx.brain.enemy_sighting.tracked(), None);
        assert_eq!(fx.brain.enemy_sighting.last_seen_time(), f32::NEG_INFINITY);
    }

    #[test]
    fn see_player_needs_a_designated_player() {
        let mut fx = Fixture::new(Vec3::ZERO);
        let player = fx.spawn(Unit::new(Team(1), Vec3::new(8.0, 0.0, 0.0)));
        fx.vision = StaticVision::new(vec![player]);
        assert_eq!(fx.tick(&SeePlayer, 0.0).status, Status::Failure);

        fx.brain.player = Some(player);
        assert_eq!(fx.tick(&SeePlayer, 0.0).status, Status::Success);
    }

    #[test]
    fn enemy_ammo_is_checked() {
        let mut fx = Fixture::new(Vec3::ZERO);
        let enemy = fx.spawn(Unit::new(Team(1), Vec3::new(8.0, 0.0, 0.0)).with_ammo(0));
        fx.vision = StaticVision::new(vec![enemy]);
        fx.tick(&AcquireEnemy, 0.0);

        assert_eq!(fx.tick(&EnemyHasAmmo, 0.0).status, Status::Failure);
        fx.registry.unit_mut(enemy).unwrap().ammo = 3;
        assert_eq!(fx.tick(&EnemyHasAmmo, 0.0).status, Status::Success);
    }

    #[test]
    fn attacker_sight_of_destination_respects_walls() {
        let mut fx = Fixture::new(Vec3::new(10.0, 0.0, 0.0));
        let attacker = fx.spawn(Unit::new(Team(1), Vec3::ZERO));
        assert_eq!(
            fx.tick(&HasLineOfSightAttackerDestination, 0.0).status,
            Status::Failure
        );

        fx.me().register_hit(Some(attacker), 0.0);
        fx.agent.set_destination(Vec3::new(20.0, 0.0, 0.0));
        assert_eq!(
            fx.tick(&HasLineOfSightAttackerDestination, 0.1).status,
            Status::Success
        );

        fx.physics.add_wall(
            Vec3::new(12.0, 0.0, -20.0),
            Vec3::new(13.0, 4.0, 20.0),
            ColliderTags::BLOCKS_SHOTS,
        );
        assert_eq!(
            fx.tick(&HasLineOfSightAttackerDestination, 0.2).status,
            Status::Failure
        );
    }

    #[test]
    fn projectile_alert_reports_elapsed_time() {
        let mut fx = Fixture::new(Vec3::ZERO);
        let node = Inspect::new("alert", LastProjectileSeenWithin { duration: 1.0 });
        assert_eq!(fx.tick(&node, 5.0).status, Status::Failure);

        fx.vision.last_projectile_seen_time = 4.5;
        let outcome = fx.inspect(&node, 5.0);
        assert_eq!(outcome.status, Status::Success);
        assert_eq!(outcome.trace[0].debug_info.as_deref(), Some("t=0.50"));

        assert_eq!(fx.tick(&node, 5.5).status, Status::Failure);
    }
}
