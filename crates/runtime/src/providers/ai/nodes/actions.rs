//! Action nodes for AI behavior trees.
//!
//! Action nodes change the unit's decision state, steer its navigation
//! agent, or queue [`AiCommand`]s for the host to execute.

use behavior_tree::{Behavior, Inspector, Status};
use combat_core::{CoverQuery, CoverSearch};
use glam::{Quat, Vec3};
use rand::{Rng, RngCore};

use crate::providers::ai::{AiCommand, AiContext};

// ============================================================================
// Target Selection
// ============================================================================

/// Re-evaluates the enemy (subject to the acquisition cooldown).
///
/// Succeeds when an enemy is acquired.
pub struct AcquireEnemy;

impl Behavior<AiContext<'_>> for AcquireEnemy {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let previous = ctx.brain.acquisition.enemy(ctx.registry);
        let visibles = ctx.vision.visibles();
        let enemy = ctx.brain.acquisition.acquire(
            ctx.now,
            ctx.unit,
            ctx.registry,
            visibles,
            &ctx.config.acquisition,
        );
        if enemy != previous {
            tracing::debug!(unit = %ctx.unit, ?previous, ?enemy, "enemy changed");
        }
        Status::from_bool(enemy.is_some())
    }
}

/// Forgets the enemy, its sighting and the last shooter. Always succeeds.
pub struct ClearEnemy;

impl Behavior<AiContext<'_>> for ClearEnemy {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.brain.acquisition.clear(ctx.registry, ctx.unit);
        ctx.brain.enemy_sighting.forget();
        Status::Success
    }
}

// ============================================================================
// Aiming
// ============================================================================

/// Aims at the enemy's current position.
pub struct SetTargetEnemy;

impl Behavior<AiContext<'_>> for SetTargetEnemy {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let Some(position) = ctx.enemy().map(|(_, enemy)| enemy.position) else {
            return Status::Failure;
        };
        ctx.brain.aim_target = Some(position);
        Status::Success
    }
}

/// Aims at the position where the enemy was last seen.
pub struct SetTargetEnemyLastSeen;

impl Behavior<AiContext<'_>> for SetTargetEnemyLastSeen {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        if ctx.enemy().is_none() {
            return Status::Failure;
        }
        match ctx.brain.enemy_sighting.last_known_position() {
            Some(position) => {
                ctx.brain.aim_target = Some(position);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Aims at the designated player's current position.
pub struct SetTargetPlayer;

impl Behavior<AiContext<'_>> for SetTargetPlayer {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let Some(position) = ctx
            .registry
            .live(ctx.brain.player)
            .and_then(|player| ctx.registry.get(player))
            .map(|entity| entity.position())
        else {
            return Status::Failure;
        };
        ctx.brain.aim_target = Some(position);
        Status::Success
    }
}

/// Aims one unit ahead, rotated `degrees` about the vertical axis.
///
/// Positive angles turn clockwise when seen from above.
pub struct SetTargetAngle {
    pub degrees: f32,
}

impl Behavior<AiContext<'_>> for SetTargetAngle {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let Some(me) = ctx.me() else {
            return Status::Failure;
        };
        let target = me.position + Quat::from_rotation_y(self.degrees.to_radians()) * me.forward;
        ctx.brain.aim_target = Some(target);
        Status::Success
    }
}

/// Turns toward the aim target at `rotation_speed` per second.
///
/// Fails without a target or when standing on it.
pub struct FaceTarget;

impl Behavior<AiContext<'_>> for FaceTarget {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let Some(target) = ctx.brain.aim_target else {
            return Status::Failure;
        };
        let step = (ctx.config.motion.rotation_speed * ctx.dt).clamp(0.0, 1.0);
        let Some(me) = ctx.me_mut() else {
            return Status::Failure;
        };

        let offset = target - me.position;
        let Some(desired) = Vec3::new(offset.x, 0.0, offset.z).try_normalize() else {
            return Status::Failure;
        };
        let turn = Quat::IDENTITY.slerp(Quat::from_rotation_arc(me.forward, desired), step);
        let forward = turn * me.forward;
        me.face(forward);
        Status::Success
    }
}

// ============================================================================
// Movement
// ============================================================================

/// Heads for the enemy's current position.
pub struct SetDestinationEnemy;

impl Behavior<AiContext<'_>> for SetDestinationEnemy {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let Some(destination) = ctx.enemy().map(|(_, enemy)| enemy.position) else {
            return Status::Failure;
        };
        Status::from_bool(ctx.agent.set_destination(destination))
    }
}

/// Heads for a random point on the ground within a radius of the unit.
///
/// A given `radius` replaces the remembered one for later calls.
pub struct SetDestinationRandom {
    pub radius: Option<f32>,
}

impl Behavior<AiContext<'_>> for SetDestinationRandom {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        if let Some(radius) = self.radius {
            ctx.brain.random_radius = radius.max(0.0);
        }
        let Some(origin) = ctx.me().map(|me| me.position) else {
            return Status::Failure;
        };
        let offset = random_in_disc(ctx.rng) * ctx.brain.random_radius;
        Status::from_bool(ctx.agent.set_destination(origin + offset))
    }
}

/// Heads for the best point hidden from the attacker.
///
/// Fails without an attacker, and when no hidden point is reachable; in the
/// latter case the unit is told to stay where it is.
pub struct SetDestinationCover;

impl Behavior<AiContext<'_>> for SetDestinationCover {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let Some((attacker, attacker_position)) = ctx.attacker() else {
            return Status::Failure;
        };
        let Some(defender_position) = ctx.me().map(|me| me.position) else {
            return Status::Failure;
        };
        let query = CoverQuery {
            defender: ctx.unit,
            defender_position,
            attacker,
            attacker_position,
        };

        let config = ctx.config;
        let search = CoverSearch::new(&config.cover, config.perception.destination_tolerance);
        let outcome = search.find(&query, ctx.physics, ctx.planner, ctx.rng);

        if outcome.is_found() {
            tracing::debug!(
                unit = %ctx.unit,
                %attacker,
                destination = ?outcome.destination(),
                "cover selected"
            );
        } else {
            tracing::warn!(unit = %ctx.unit, %attacker, ?outcome, "no reachable cover");
        }

        let accepted = ctx.agent.set_destination(outcome.destination());
        Status::from_bool(outcome.is_found() && accepted)
    }
}

/// Heads for a random integer point on the roaming square around the origin.
pub struct PickRandomDestination;

impl Behavior<AiContext<'_>> for PickRandomDestination {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let extent = ctx.config.motion.roam_extent.max(1);
        let x = ctx.rng.gen_range(-extent..extent);
        let z = ctx.rng.gen_range(-extent..extent);
        let destination = Vec3::new(x as f32, 0.0, z as f32);
        Status::from_bool(ctx.agent.set_destination(destination))
    }
}

/// Running until the agent arrives, then Success.
pub struct MoveToDestination;

impl Behavior<AiContext<'_>> for MoveToDestination {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        if ctx.is_inspected() {
            ctx.set_debug_info(format!("t={:.2}", ctx.now));
        }
        if ctx.agent.has_arrived() {
            Status::Success
        } else {
            Status::Running
        }
    }
}

// ============================================================================
// Weapons
// ============================================================================

/// Fires one round along the unit's facing.
///
/// Fails when the magazine is empty.
pub struct Fire;

impl Behavior<AiContext<'_>> for Fire {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let config = ctx.config;
        let shooter = ctx.unit;
        let Some(me) = ctx.me_mut() else {
            return Status::Failure;
        };
        if me.ammo == 0 {
            return Status::Failure;
        }
        me.ammo -= 1;
        let command = AiCommand::Fire {
            shooter,
            origin: me.muzzle(&config.combat),
            direction: me.forward,
            impulse: config.combat.fire_impulse,
        };
        ctx.push_command(command);
        Status::Success
    }
}

/// Asks the host to destroy the unit. Always succeeds.
pub struct Explode;

impl Behavior<AiContext<'_>> for Explode {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        let unit = ctx.unit;
        ctx.push_command(AiCommand::Explode { unit });
        Status::Success
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Uniform point in the unit disc on the ground plane.
fn random_in_disc(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let x: f32 = rng.gen_range(-1.0..=1.0);
        let z: f32 = rng.gen_range(-1.0..=1.0);
        if x * x + z * z <= 1.0 {
            return Vec3::new(x, 0.0, z);
        }
    }
}
