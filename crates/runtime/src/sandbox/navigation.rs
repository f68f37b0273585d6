//! Straight-line path planning and locomotion on an open, bounded floor.

use std::collections::BTreeMap;

use combat_core::{EntityId, EntityRegistry, NavPath, NavigationAgent, PathPlanner, PathStatus};
use glam::Vec3;

/// Plans direct routes for registered agents.
///
/// Destinations outside the floor produce a partial path that ends at the
/// closest point on the floor's edge.
#[derive(Clone, Debug)]
pub struct StraightLinePlanner {
    half_extent: f32,
    agents: BTreeMap<EntityId, Vec3>,
}

impl StraightLinePlanner {
    pub fn new(half_extent: f32) -> Self {
        Self {
            half_extent,
            agents: BTreeMap::new(),
        }
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Registers or moves an agent.
    pub fn place(&mut self, agent: EntityId, position: Vec3) {
        self.agents.insert(agent, position);
    }

    /// Refreshes positions of registered agents and forgets dead ones.
    pub fn sync_agents(&mut self, registry: &EntityRegistry) {
        self.agents.retain(|id, position| match registry.unit(*id) {
            Some(unit) => {
                *position = unit.position;
                true
            }
            None => false,
        });
    }

    fn clamp(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(-self.half_extent, self.half_extent),
            point.y,
            point.z.clamp(-self.half_extent, self.half_extent),
        )
    }
}

impl PathPlanner for StraightLinePlanner {
    fn calculate_path(&self, agent: EntityId, destination: Vec3) -> Option<NavPath> {
        let start = *self.agents.get(&agent)?;
        if !destination.is_finite() {
            return Some(NavPath::invalid());
        }
        let end = self.clamp(destination);
        let status = if end == destination {
            PathStatus::Complete
        } else {
            PathStatus::Partial
        };
        Some(NavPath::new(vec![start, end], status))
    }
}

/// Moves a unit toward its destination at constant speed.
#[derive(Clone, Debug, PartialEq)]
pub struct SandboxAgent {
    pub position: Vec3,
    destination: Vec3,
    stopping_distance: f32,
    speed: f32,
}

impl SandboxAgent {
    pub fn new(position: Vec3, speed: f32) -> Self {
        Self {
            position,
            destination: position,
            stopping_distance: 0.0,
            speed,
        }
    }

    /// Advances by `dt` seconds and returns the new position.
    ///
    /// The agent halts at the stopping distance and never overshoots.
    pub fn step(&mut self, dt: f32) -> Vec3 {
        let offset = self.destination - self.position;
        let travel = (offset.length() - self.stopping_distance).max(0.0);
        if let Some(direction) = offset.try_normalize() {
            self.position += direction * travel.min(self.speed * dt.max(0.0));
        }
        self.position
    }
}

impl NavigationAgent for SandboxAgent {
    fn set_destination(&mut self, destination: Vec3) -> bool {
        if !destination.is_finite() {
            return false;
        }
        self.destination = destination;
        true
    }

    fn destination(&self) -> Vec3 {
        self.destination
    }

    fn remaining_distance(&self) -> f32 {
        self.position.distance(self.destination)
    }

    fn stopping_distance(&self) -> f32 {
        self.stopping_distance
    }

    fn set_stopping_distance(&mut self, distance: f32) {
        self.stopping_distance = distance.max(0.0);
    }

    fn path_pending(&self) -> bool {
        false
    }
}
