//! Layer 2: Goal-oriented tactical behaviors.
//!
//! Tactics combine patterns to achieve one combat goal each. Each tactic
//! answers the question: "How do I accomplish X?"
//!
//! # Naming Convention
//!
//! Tactics are named after the goal: `take_cover()`, `engage()`, `pursue()`.

use behavior_tree::{AlwaysSucceed, Selector, Sequence};

use crate::providers::ai::nodes::{
    AcquireEnemy, ClearEnemy, FaceTarget, HasEnemy, LastProjectileSeenWithin, MoveToDestination,
    SetDestinationEnemy, SetTargetEnemyLastSeen,
};

use super::{BehaviorTree, node, patterns};

// ============================================================================
// Defensive Tactics
// ============================================================================

/// Hide from the attacker while projectiles were seen within `alert` seconds.
///
/// The enemy is refreshed first so an unseen shooter can still be hidden
/// from once it has been spotted.
pub fn take_cover(alert: f32) -> BehaviorTree {
    node(Sequence::new(vec![
        node(LastProjectileSeenWithin { duration: alert }),
        node(AlwaysSucceed::new(node(AcquireEnemy))),
        patterns::keep_or_find_cover(),
        node(MoveToDestination),
    ]))
}

// ============================================================================
// Engagement Tactics
// ============================================================================

/// Shoot a visible enemy, or charge one that cannot shoot back.
pub fn engage() -> BehaviorTree {
    node(Selector::new(vec![
        patterns::shoot_visible_enemy(),
        patterns::rush_disarmed_enemy(),
    ]))
}

/// Head for an enemy that went out of sight, then forget it.
pub fn pursue() -> BehaviorTree {
    node(Sequence::new(vec![
        node(HasEnemy),
        node(AlwaysSucceed::new(node(SetTargetEnemyLastSeen))),
        node(AlwaysSucceed::new(node(FaceTarget))),
        node(SetDestinationEnemy),
        node(MoveToDestination),
        node(ClearEnemy),
    ]))
}
