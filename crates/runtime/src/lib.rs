//! Runtime for behavior-tree controlled shooter units.
//!
//! This crate wires the reusable [`behavior_tree`] combinators to the
//! decision algorithms of [`combat_core`]. Hosts create one
//! [`EnemyController`] per unit, lend it engine services through
//! [`AiServices`] every frame, and execute the [`AiCommand`]s it returns.
//!
//! Modules are organized by responsibility:
//! - [`providers`] hosts the AI controller, node catalog and tree library
//! - [`config`] loads validated tunables from TOML
//! - [`sandbox`] provides in-memory engine services and a fixed-step arena
//! - [`error`] defines the runtime error type
pub mod config;
pub mod error;
pub mod providers;
pub mod sandbox;

pub use config::ConfigLoader;
pub use error::{Result, RuntimeError};
pub use providers::ai::{
    AiCommand, AiContext, AiServices, BehaviorTree, Brain, EnemyController, TickReport,
    TraceEntry, node, presets,
};
pub use sandbox::{Arena, ArenaConfig, StepReport};
