//! Traits describing the engine services the decision layer consumes.
//!
//! Physics ray queries, path planning, the controlled unit's navigation
//! agent and the vision sensor are all owned by the host engine. The
//! decision layer only sees them through these traits, which keeps every
//! algorithm testable against in-memory stand-ins.
mod clock;
mod navigation;
mod physics;
mod vision;

pub use clock::SimClock;
pub use navigation::{NavPath, NavigationAgent, PathPlanner, PathStatus};
pub use physics::{ColliderRef, ColliderTags, PhysicsQuery, RayHit};
pub use vision::{StaticVision, VisionSensor};
