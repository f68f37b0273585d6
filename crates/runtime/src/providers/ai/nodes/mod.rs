//! Shooter-specific behavior tree nodes.
//!
//! Each node is a thin adapter over `combat-core` decision primitives.
//! Nodes are divided into:
//!
//! - `conditions`: Nodes that check the unit's situation (Success/Failure)
//! - `actions`: Nodes that aim, move, or queue commands for the host

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
