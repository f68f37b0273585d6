//! Layer 1: Basic condition/action chains.
//!
//! The smallest reusable units in the behavior tree library.
//!
//! # Naming Convention
//!
//! Patterns follow the `action_when_condition()` convention when they are
//! guarded, and plain `verb_noun()` otherwise.

use behavior_tree::{Inverter, Selector, Sequence};

use crate::providers::ai::nodes::{
    AcquireEnemy, EnemyHasAmmo, Explode, FaceTarget, Fire, HasEnemy,
    HasLineOfSightAttackerDestination, IsEnemyVisible, IsHealthLessThan, MoveToDestination,
    PickRandomDestination, SeePlayer, SetDestinationCover, SetDestinationEnemy,
    SetDestinationRandom, SetTargetAngle, SetTargetEnemy, SetTargetPlayer,
};

use super::{BehaviorTree, node};

// ============================================================================
// Survival Patterns
// ============================================================================

/// Self-destruct once health drops below `health` points.
pub fn explode_when_dying(health: f32) -> BehaviorTree {
    node(Sequence::new(vec![
        node(IsHealthLessThan { health }),
        node(Explode),
    ]))
}

/// Keep the current destination while it is hidden, else search for cover.
///
/// Fails when there is no attacker or no reachable cover.
pub fn keep_or_find_cover() -> BehaviorTree {
    node(Selector::new(vec![
        node(Inverter::new(node(HasLineOfSightAttackerDestination))),
        node(SetDestinationCover),
    ]))
}

// ============================================================================
// Combat Patterns
// ============================================================================

/// Acquire an enemy, and if it is in sight turn toward it and shoot.
///
/// The unit also closes in to shooting range while firing.
pub fn shoot_visible_enemy() -> BehaviorTree {
    node(Sequence::new(vec![
        node(AcquireEnemy),
        node(IsEnemyVisible),
        node(SetTargetEnemy),
        node(SetDestinationEnemy),
        node(FaceTarget),
        node(Fire),
    ]))
}

/// Charge an enemy that has run out of ammunition.
pub fn rush_disarmed_enemy() -> BehaviorTree {
    node(Sequence::new(vec![
        node(HasEnemy),
        node(Inverter::new(node(EnemyHasAmmo))),
        node(SetDestinationEnemy),
        node(MoveToDestination),
    ]))
}

/// Turn toward and shoot the designated player while it is in sight.
pub fn shoot_player_when_seen() -> BehaviorTree {
    node(Sequence::new(vec![
        node(SeePlayer),
        node(SetTargetPlayer),
        node(FaceTarget),
        node(Fire),
    ]))
}

// ============================================================================
// Movement Patterns
// ============================================================================

/// Walk to the current destination, then pick a new one on the roaming square.
pub fn roam() -> BehaviorTree {
    node(Sequence::new(vec![
        node(MoveToDestination),
        node(PickRandomDestination),
    ]))
}

/// Walk to the current destination, then pick a new one close by.
pub fn wander(radius: f32) -> BehaviorTree {
    node(Sequence::new(vec![
        node(MoveToDestination),
        node(SetDestinationRandom {
            radius: Some(radius),
        }),
    ]))
}

/// Keep turning by `degrees` relative to the current facing.
pub fn look_around(degrees: f32) -> BehaviorTree {
    node(Sequence::new(vec![
        node(SetTargetAngle { degrees }),
        node(FaceTarget),
    ]))
}
