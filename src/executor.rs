//! Provides the [`ImmediateExecutor`] trait, the dispatch surface outer
//! machinery uses once it has discovered which executor accompanies a
//! handler, along with a trivial inline implementation.

/// # [`ImmediateExecutor`]
/// An execution context that can be asked to run a continuation right away,
/// inline, rather than deferring to its own scheduling policy.
///
/// A [`Binder`](crate::Binder) never invokes its executor; it only stores the
/// handle and surfaces it through
/// [`AssociatedImmediateExecutor`](crate::AssociatedImmediateExecutor).
/// Whether a continuation actually runs inline is entirely up to the
/// machinery that performs the query and to the executor's own contract.
pub trait ImmediateExecutor: Clone {
    /// Runs `f` immediately.
    fn execute<F: FnOnce()>(&self, f: F);
}

/// # [`InlineExecutor`]
/// Runs continuations directly on the calling thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineExecutor;

impl ImmediateExecutor for InlineExecutor {
    fn execute<F: FnOnce()>(&self, f: F) {
        f();
    }
}
