//! Behavior-tree AI for shooter enemy units.
//!
//! Every frame each controller re-evaluates its tree from the root:
//!
//! 1. **Perception**: conditions refresh "last seen" bookkeeping from the
//!    frame's visibility set
//! 2. **Target choice**: acquisition picks the enemy, under a cooldown
//! 3. **Positioning**: line-of-sight checks and cover search pick where to go
//! 4. **Output**: the navigation agent is steered and commands (fire,
//!    explode) are queued for the host
//!
//! # Core Components
//!
//! - [`EnemyController`]: owns one unit's tree, brain and tunables
//! - [`AiContext`]: blackboard passed to every node for one tick
//! - [`nodes`]: the condition and action catalog
//! - [`subtrees`] and [`presets`]: layered tree library
//! - [`Brain`], [`AiCommand`], [`TickReport`]: state and outputs

pub mod context;
pub mod nodes;
pub mod presets;
pub mod provider;
pub mod subtrees;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-export public API
pub use context::{AiContext, AiServices};
pub use provider::EnemyController;
pub use subtrees::{BehaviorTree, node};
pub use types::{AiCommand, Brain, TickReport, TraceEntry};
