//! Per-actor decision state and the values a tick hands back to the host.

use behavior_tree::Status;
use combat_core::{EntityId, MotionConfig, PerceptionState, TargetAcquisition};
use glam::Vec3;

/// Mutable decision state owned by one controller.
///
/// Everything a node remembers between frames lives here: nothing is shared
/// between actors and nothing is global.
#[derive(Clone, Debug, PartialEq)]
pub struct Brain {
    /// Last sighting of the acquired enemy.
    pub enemy_sighting: PerceptionState,
    /// Last sighting of the designated player.
    pub player_sighting: PerceptionState,
    pub acquisition: TargetAcquisition,
    /// Point the unit aims at, set by the `SetTarget*` nodes.
    pub aim_target: Option<Vec3>,
    /// Radius used by random destinations when no radius is given.
    pub random_radius: f32,
    /// Entity treated as "the player" by `SeePlayer`.
    pub player: Option<EntityId>,
}

impl Brain {
    pub fn new(motion: &MotionConfig) -> Self {
        Self {
            enemy_sighting: PerceptionState::new(),
            player_sighting: PerceptionState::new(),
            acquisition: TargetAcquisition::new(),
            aim_target: None,
            random_radius: motion.random_destination_radius,
            player: None,
        }
    }
}

/// Side effects requested by action nodes and executed by the host.
#[derive(Clone, Copy, Debug, PartialEq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum AiCommand {
    /// Spawn a projectile at `origin` and push it along `direction`.
    Fire {
        shooter: EntityId,
        origin: Vec3,
        direction: Vec3,
        impulse: f32,
    },
    /// Destroy the unit.
    Explode { unit: EntityId },
}

impl AiCommand {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Status of one labelled node, recorded while the controller is inspected.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceEntry {
    pub label: &'static str,
    pub status: Status,
    pub debug_info: Option<String>,
}

/// Outcome of one controller tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub status: Status,
    pub commands: Vec<AiCommand>,
    /// Empty unless the controller is inspected.
    pub trace: Vec<TraceEntry>,
}

impl TickReport {
    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }
}
