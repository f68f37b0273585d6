//! Layer 4: Complete AI definitions for unit archetypes.
//!
//! Each preset is a ready-to-use behavior tree with appropriate fallbacks,
//! built by composing subtrees from layers 1-3:
//!
//! ```text
//! rifleman()
//!   └─ Selector
//!       ├─ patterns::explode_when_dying(..)          ← Layer 1
//!       ├─ strategies::rifleman_combat(..)           ← Layer 3
//!       │   ├─ tactics::take_cover(..)               ← Layer 2
//!       │   ├─ tactics::engage()                     ← Layer 2
//!       │   └─ tactics::pursue()                     ← Layer 2
//!       └─ patterns::roam()                          ← Layer 1
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use ai_runtime::{EnemyController, presets};
//!
//! let controller = EnemyController::new(unit, presets::rifleman(), AiConfig::default())?;
//! ```

use behavior_tree::{Inspect, Selector};

use super::subtrees::{self, BehaviorTree, node};

/// Health below which units self-destruct.
pub const DYING_HEALTH: f32 = 1.0;

/// Seconds a rifleman stays in cover after the last projectile it saw.
pub const COVER_ALERT_SECS: f32 = 1.0;

/// Degrees a sentry turns per scan step.
pub const SENTRY_SCAN_DEGREES: f32 = 45.0;

// ============================================================================
// Combat Units
// ============================================================================

/// Rifleman: mobile infantry that hides under fire.
///
/// # Behavior
///
/// 1. Explode when health is depleted
/// 2. Under fire: keep or find a destination hidden from the attacker
/// 3. Enemy in sight: close in, turn toward it and fire
/// 4. Enemy out of ammo: charge it
/// 5. Enemy lost: head for it, then forget it
/// 6. Otherwise roam the map
pub fn rifleman() -> BehaviorTree {
    node(Selector::new(vec![
        node(Inspect::new(
            "dying",
            subtrees::patterns::explode_when_dying(DYING_HEALTH),
        )),
        subtrees::strategies::rifleman_combat(COVER_ALERT_SECS),
        node(Inspect::new("roam", subtrees::patterns::roam())),
    ]))
}

/// Sentry: stationary turret that tracks the designated player.
///
/// The controller must be given a player with
/// [`EnemyController::with_player`](super::EnemyController::with_player),
/// otherwise the sentry only scans.
pub fn sentry() -> BehaviorTree {
    node(Selector::new(vec![
        node(Inspect::new(
            "dying",
            subtrees::patterns::explode_when_dying(DYING_HEALTH),
        )),
        subtrees::strategies::sentry_watch(SENTRY_SCAN_DEGREES),
    ]))
}

// ============================================================================
// Special/Utility Units
// ============================================================================

/// Training dummy: never acts, but still explodes when destroyed.
///
/// The tree fails on every tick the dummy is alive.
pub fn dummy() -> BehaviorTree {
    subtrees::patterns::explode_when_dying(DYING_HEALTH)
}
