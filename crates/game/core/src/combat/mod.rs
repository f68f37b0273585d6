//! Host-side combat bookkeeping.
//!
//! The decision layer only reads `shot_by`, `last_shot_time` and health.
//! These helpers are how the host writes them when the physics engine reports
//! an impact or when simulation time advances.

pub mod hit;
pub mod regen;

pub use hit::{HitReport, apply_projectile_hit};
pub use regen::regenerate_health;
