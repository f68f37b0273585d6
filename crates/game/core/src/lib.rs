//! Deterministic decision logic and data types for shooter enemy units.
//!
//! `combat-core` defines the per-actor decision primitives (perception,
//! line of sight, cover search, target acquisition) and the entity state
//! they read. Engine services are consumed through the traits in [`env`], so
//! every algorithm runs the same against the real engine and in-memory
//! stand-ins. Behavior nodes in `ai-runtime` are thin adapters over the
//! types re-exported here.
pub mod combat;
pub mod config;
pub mod decision;
pub mod env;
pub mod error;
pub mod state;

pub use combat::{HitReport, apply_projectile_hit, regenerate_health};
pub use config::{
    AcquisitionConfig, AiConfig, CombatConfig, CoverConfig, MotionConfig, PerceptionConfig,
};
pub use decision::{
    CoverCandidate, CoverOutcome, CoverQuery, CoverSearch, PerceptionState, TargetAcquisition,
    has_line_of_sight,
};
pub use env::{
    ColliderRef, ColliderTags, NavPath, NavigationAgent, PathPlanner, PathStatus, PhysicsQuery,
    RayHit, SimClock, StaticVision, VisionSensor,
};
pub use error::{CombatError, ConfigError, ErrorSeverity, RegistryError};
pub use state::{Entity, EntityId, EntityKind, EntityRegistry, Health, Projectile, Team, Unit};
