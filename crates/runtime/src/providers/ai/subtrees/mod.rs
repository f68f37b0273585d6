//! Reusable behavior tree subtrees.
//!
//! This module provides a hierarchical library of composable behavior patterns
//! for building shooter AI. Subtrees are organized into three layers:
//!
//! - **Layer 1 (Patterns)**: Short condition/action chains
//! - **Layer 2 (Tactics)**: Goal-oriented behaviors combining patterns
//! - **Layer 3 (Strategies)**: Priority ordering of tactics
//!
//! # Architecture
//!
//! ```text
//! Layer 3 (strategies)
//!     └─ rifleman_combat()
//!         ├─ take_cover()                 ← Layer 2
//!         │   └─ keep_or_find_cover()     ← Layer 1
//!         ├─ engage()                     ← Layer 2
//!         │   ├─ shoot_visible_enemy()    ← Layer 1
//!         │   └─ rush_disarmed_enemy()    ← Layer 1
//!         └─ pursue()                     ← Layer 2
//! ```
//!
//! # Reactivity
//!
//! Trees are re-evaluated from the root every frame. Long-running work
//! (walking to a destination) is expressed as a node that keeps answering
//! `Running`, and patterns check "already done?" before redoing expensive
//! work, e.g. cover is only searched again once the attacker can see the
//! current destination.

pub mod patterns;
pub mod strategies;
pub mod tactics;

use behavior_tree::Behavior;

use super::context::AiContext;

/// Type alias for behavior trees to reduce verbosity.
///
/// The tree is valid for a context borrowing anything, so one tree can be
/// ticked every frame with fresh borrows.
pub type BehaviorTree = Box<dyn for<'a> Behavior<AiContext<'a>>>;

/// Boxes a node as a [`BehaviorTree`].
pub fn node<B>(behavior: B) -> BehaviorTree
where
    B: for<'a> Behavior<AiContext<'a>> + 'static,
{
    Box::new(behavior)
}
