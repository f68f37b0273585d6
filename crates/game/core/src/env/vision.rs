use crate::state::EntityId;

/// Per-frame output of the unit's vision sensor.
///
/// The visible set is a transient snapshot in arbitrary but stable order;
/// it may still name bodies destroyed since the sensor ran.
pub trait VisionSensor {
    fn visibles(&self) -> &[EntityId];

    /// Simulation time at which a projectile was last seen.
    fn last_projectile_seen_time(&self) -> f32 {
        f32::NEG_INFINITY
    }
}

/// A fixed visibility snapshot, filled in by the host each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticVision {
    pub visibles: Vec<EntityId>,
    pub last_projectile_seen_time: f32,
}

impl StaticVision {
    pub fn new(visibles: Vec<EntityId>) -> Self {
        Self {
            visibles,
            last_projectile_seen_time: f32::NEG_INFINITY,
        }
    }

    pub fn blind() -> Self {
        Self::new(Vec::new())
    }
}

impl Default for StaticVision {
    fn default() -> Self {
        Self::blind()
    }
}

impl VisionSensor for StaticVision {
    fn visibles(&self) -> &[EntityId] {
        &self.visibles
    }

    fn last_projectile_seen_time(&self) -> f32 {
        self.last_projectile_seen_time
    }
}
