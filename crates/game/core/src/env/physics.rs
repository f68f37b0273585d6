use bitflags::bitflags;
use glam::Vec3;

use crate::state::EntityId;

bitflags! {
    /// Capabilities attached to a collider.
    ///
    /// Only colliders carrying [`ColliderTags::BLOCKS_SHOTS`] take part in
    /// line-of-sight checks; triggers and decorative geometry are transparent.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ColliderTags: u8 {
        const BLOCKS_SHOTS = 1 << 0;
        const TRIGGER = 1 << 1;
        const DECORATIVE = 1 << 2;
    }
}

/// The collider struck by a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColliderRef {
    /// Game object the collider is attached to.
    pub owner: EntityId,
    /// Physics body the collider belongs to, if it is part of one.
    pub attached_body: Option<EntityId>,
    pub tags: ColliderTags,
}

impl ColliderRef {
    pub fn new(owner: EntityId, tags: ColliderTags) -> Self {
        Self {
            owner,
            attached_body: None,
            tags,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: EntityId) -> Self {
        self.attached_body = Some(body);
        self
    }

    /// The game object a hit on this collider counts against.
    ///
    /// Colliders that are part of a physics body resolve to the body;
    /// free-standing colliders resolve to their own owner.
    pub fn resolved_owner(&self) -> EntityId {
        self.attached_body.unwrap_or(self.owner)
    }

    pub fn blocks_shots(&self) -> bool {
        self.tags.contains(ColliderTags::BLOCKS_SHOTS)
    }
}

/// One intersection along a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    /// Distance from the ray origin.
    pub distance: f32,
    pub collider: ColliderRef,
}

/// Ray queries against the physics scene.
pub trait PhysicsQuery: Send + Sync {
    /// Every intersection of the ray within `max_distance`, nearest first.
    ///
    /// `direction` is expected to be unit length.
    fn raycast_all(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Vec<RayHit>;
}
