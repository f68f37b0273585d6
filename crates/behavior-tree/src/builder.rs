//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides short constructor functions so trees read as
//! nested calls: `selector(vec![sequence(vec![a, b]), c])`. The functions
//! return concrete node types; box them where a trait object is needed.

use crate::{AlwaysSucceed, Condition, Inspect, Inverter, Selector, Sequence, Task};

/// Creates a sequence node.
///
/// Shorthand for `Sequence::new(children)`.
#[inline]
pub fn sequence<N>(children: Vec<N>) -> Sequence<N> {
    Sequence::new(children)
}

/// Creates a selector node.
///
/// Shorthand for `Selector::new(children)`.
#[inline]
pub fn selector<N>(children: Vec<N>) -> Selector<N> {
    Selector::new(children)
}

/// Creates an inverter node.
#[inline]
pub fn inverter<N>(child: N) -> Inverter<N> {
    Inverter::new(child)
}

/// Creates an always-succeed node.
#[inline]
pub fn always_succeed<N>(child: N) -> AlwaysSucceed<N> {
    AlwaysSucceed::new(child)
}

/// Labels a subtree for inspection tooling.
#[inline]
pub fn inspect<N>(label: &'static str, child: N) -> Inspect<N> {
    Inspect::new(label, child)
}

/// Creates a closure-backed action node.
#[inline]
pub fn task<F>(run: F) -> Task<F> {
    Task::new(run)
}

/// Creates a closure-backed condition node.
#[inline]
pub fn condition<F>(check: F) -> Condition<F> {
    Condition::new(check)
}
