//! The node trait every composite, decorator and leaf implements.

use crate::Status;

/// One node of a reactive tree, evaluated against a blackboard `C`.
///
/// Trees are rebuilt from nothing but their structure each frame: a node
/// keeps no per-frame state of its own, so one tree value can be shared by
/// any number of actors. Timers, remembered targets and similar memory live
/// in `C`.
pub trait Behavior<C>: Send + Sync {
    /// Runs the node once.
    ///
    /// Returns [`Status::Running`] when the work spans several frames; the
    /// tree is simply ticked again from the root next frame.
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Boxed nodes, including higher-ranked trait objects such as
/// `Box<dyn for<'a> Behavior<Ctx<'a>>>`, are nodes too.
impl<C, B> Behavior<C> for Box<B>
where
    B: Behavior<C> + ?Sized,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
