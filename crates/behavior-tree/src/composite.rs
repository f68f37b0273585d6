//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Both composites are *reactive*: they keep no memory of which child was
//! running last frame and always start again from the first child. A child
//! that reports `Running` stops the scan and the composite reports `Running`.
//!
//! Composites are generic over the child type `N` rather than the context, so
//! a `Sequence<Box<dyn for<'a> Behavior<Ctx<'a>>>>` is itself a behavior for
//! every context lifetime.

use crate::{Behavior, Status};

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence **stops immediately** and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<N> {
    children: Vec<N>,
}

impl<N> Sequence<N> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<N>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always false; construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C, N> Behavior<C> for Sequence<N>
where
    N: Behavior<C>,
{
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Success => continue,
                other => return other,
            }
        }
        Status::Success
    }
}

/// Executes child behaviors in sequence until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Running`, the selector **stops immediately** and returns `Running`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<N> {
    children: Vec<N>,
}

impl<N> Selector<N> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<N>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always false; construction rejects empty selectors.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C, N> Behavior<C> for Selector<N>
where
    N: Behavior<C>,
{
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Failure => continue,
                other => return other,
            }
        }
        Status::Failure
    }
}
