use glam::Vec3;

use crate::state::EntityId;

/// How much of the requested route a path covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PathStatus {
    /// The path reaches the destination.
    Complete,
    /// The path ends at the closest reachable point.
    Partial,
    /// No path could be built.
    Invalid,
}

/// A computed route as an ordered list of corners.
#[derive(Clone, Debug, PartialEq)]
pub struct NavPath {
    pub corners: Vec<Vec3>,
    pub status: PathStatus,
}

impl NavPath {
    pub fn new(corners: Vec<Vec3>, status: PathStatus) -> Self {
        Self { corners, status }
    }

    pub fn invalid() -> Self {
        Self::new(Vec::new(), PathStatus::Invalid)
    }

    pub fn is_complete(&self) -> bool {
        self.status == PathStatus::Complete
    }

    /// True for complete and partial paths.
    pub fn exists(&self) -> bool {
        self.status != PathStatus::Invalid
    }

    /// Sum of the distances between consecutive corners.
    ///
    /// `None` when the path has fewer than two corners and therefore no
    /// measurable length.
    pub fn length(&self) -> Option<f32> {
        if self.corners.len() < 2 {
            return None;
        }
        Some(
            self.corners
                .windows(2)
                .map(|pair| pair[0].distance(pair[1]))
                .sum(),
        )
    }
}

/// Path computation for any unit that owns a navigation agent.
pub trait PathPlanner: Send + Sync {
    /// Plans a route for `agent` from its current position to `destination`.
    ///
    /// Returns `None` when `agent` has no navigation agent.
    fn calculate_path(&self, agent: EntityId, destination: Vec3) -> Option<NavPath>;
}

/// The controlled unit's own locomotion agent.
pub trait NavigationAgent {
    /// Requests movement toward `destination`. Returns false if rejected.
    fn set_destination(&mut self, destination: Vec3) -> bool;

    fn destination(&self) -> Vec3;

    /// Remaining distance along the current path.
    fn remaining_distance(&self) -> f32;

    fn stopping_distance(&self) -> f32;

    fn set_stopping_distance(&mut self, distance: f32);

    /// True while a requested path is still being computed.
    fn path_pending(&self) -> bool;

    /// Arrived within stopping distance and nothing left to plan.
    fn has_arrived(&self) -> bool {
        self.remaining_distance() <= self.stopping_distance() && !self.path_pending()
    }
}
