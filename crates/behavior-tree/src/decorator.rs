//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! This module provides [`Inverter`] (NOT logic), [`AlwaysSucceed`] (error
//! suppression) and [`Inspect`] (debug annotation for inspection tooling).

use crate::{Behavior, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through unchanged
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<N> {
    child: N,
}

impl<N> Inverter<N> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: N) -> Self {
        Self { child }
    }
}

impl<C, N> Behavior<C> for Inverter<N>
where
    N: Behavior<C>,
{
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

/// Returns `Success` once the child has finished, regardless of its result.
///
/// # Semantics
///
/// - If the child returns `Success`, returns `Success`
/// - If the child returns `Failure`, **still returns `Success`**
/// - If the child returns `Running`, returns `Running`
///
/// This is useful for:
/// - Optional behaviors that shouldn't cause a sequence to fail
/// - Logging/debugging nodes that observe state without affecting control flow
pub struct AlwaysSucceed<N> {
    child: N,
}

impl<N> AlwaysSucceed<N> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: N) -> Self {
        Self { child }
    }
}

impl<C, N> Behavior<C> for AlwaysSucceed<N>
where
    N: Behavior<C>,
{
    fn tick(&self, ctx: &mut C) -> Status {
        match self.child.tick(ctx) {
            Status::Running => Status::Running,
            _ => Status::Success,
        }
    }
}

/// Context capability for recording node results while a tree is inspected.
///
/// Inspection is opt-in: contexts report whether anyone is watching, and
/// [`Inspect`] nodes skip recording entirely when nobody is.
pub trait Inspector {
    /// Whether the tree is currently being watched by tooling.
    fn is_inspected(&self) -> bool;

    /// Records the status a labelled node produced this frame.
    ///
    /// Any debug string the node set during its tick should be attached to
    /// this record and then cleared.
    fn record(&mut self, label: &'static str, status: Status);
}

/// Labels a subtree so inspection tooling can show its last status.
pub struct Inspect<N> {
    label: &'static str,
    child: N,
}

impl<N> Inspect<N> {
    /// Wraps `child` under the given label.
    pub fn new(label: &'static str, child: N) -> Self {
        Self { label, child }
    }

    /// The label shown by inspection tooling.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<C, N> Behavior<C> for Inspect<N>
where
    C: Inspector,
    N: Behavior<C>,
{
    fn tick(&self, ctx: &mut C) -> Status {
        let status = self.child.tick(ctx);
        if ctx.is_inspected() {
            ctx.record(self.label, status);
        }
        status
    }
}
