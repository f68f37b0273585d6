//! Lightweight reactive behavior tree library for per-frame game AI.
//!
//! This library provides a minimal behavior tree implementation designed to
//! be re-evaluated from the root on every simulation frame.
//!
//! - **Reactive**: Composites keep no cursor; each frame starts from the root
//! - **Running state**: Long actions report progress instead of blocking
//! - **Stateless nodes**: All persistent data lives in the context
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`], [`Inspect`]
//! - Closure leaves: [`Task`], [`Condition`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;
pub mod task;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::{AlwaysSucceed, Inspect, Inspector, Inverter};
pub use status::Status;
pub use task::{Condition, Task};
