//! In-memory engine services for running controllers without a game engine.
//!
//! The sandbox supplies everything the decision layer consumes through
//! traits: box-and-sphere ray queries, straight-line navigation, range and
//! occlusion vision, and a fixed-step [`Arena`] that ties them to an
//! [`EntityRegistry`](combat_core::EntityRegistry). Integration tests and the
//! headless skirmish binary both run on it.
mod arena;
mod navigation;
mod physics;
mod vision;

pub use arena::{Arena, ArenaConfig, StepReport};
pub use navigation::{SandboxAgent, StraightLinePlanner};
pub use physics::{ArenaPhysics, BODY_CENTER_HEIGHT, BODY_RADIUS, SCENERY_ID_BASE, Wall};
pub use vision::SandboxVision;
