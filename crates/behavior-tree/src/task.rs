//! Closure-backed leaf nodes.
//!
//! Handy for one-off glue and tests where a dedicated node type would be
//! overkill.

use crate::{Behavior, Status};

/// A leaf node that runs a closure against the context.
pub struct Task<F> {
    run: F,
}

impl<F> Task<F> {
    /// Wraps `run` as a behavior node.
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<C, F> Behavior<C> for Task<F>
where
    F: Fn(&mut C) -> Status + Send + Sync,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.run)(ctx)
    }
}

/// A leaf node that maps a read-only predicate to `Success`/`Failure`.
pub struct Condition<F> {
    check: F,
}

impl<F> Condition<F> {
    /// Wraps `check` as a condition node.
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<C, F> Behavior<C> for Condition<F>
where
    F: Fn(&C) -> bool + Send + Sync,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool((self.check)(ctx))
    }
}
