//! Layer 3: Strategic decision-making behaviors.
//!
//! Strategies order tactics by priority. Each strategy answers: "When should
//! I use which tactic?"

use behavior_tree::{Inspect, Selector};

use super::{BehaviorTree, node, patterns, tactics};

/// Rifleman combat: survive incoming fire first, then fight, then chase.
///
/// # Arguments
///
/// * `alert` - Seconds after the last seen projectile during which the unit
///   stays in cover
pub fn rifleman_combat(alert: f32) -> BehaviorTree {
    node(Selector::new(vec![
        node(Inspect::new("take_cover", tactics::take_cover(alert))),
        node(Inspect::new("engage", tactics::engage())),
        node(Inspect::new("pursue", tactics::pursue())),
    ]))
}

/// Turret-like behavior: shoot the player when seen, otherwise scan.
pub fn sentry_watch(scan_degrees: f32) -> BehaviorTree {
    node(Selector::new(vec![
        node(Inspect::new("shoot_player", patterns::shoot_player_when_seen())),
        node(Inspect::new("scan", patterns::look_around(scan_degrees))),
    ]))
}
