//! Authoritative entity state.
//!
//! This module owns the data structures that describe combatants and
//! projectiles. Weak references between entities are plain [`EntityId`]s
//! that are checked for liveness against the [`EntityRegistry`] at every use.
pub mod entity;
pub mod health;
pub mod registry;

pub use entity::{Entity, EntityId, EntityKind, Projectile, Team, Unit};
pub use health::Health;
pub use registry::EntityRegistry;
