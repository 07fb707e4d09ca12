//! # Associated
//! The associator customization points: the generic associated-property
//! query, and the immediate-executor query that a [`Binder`] always answers
//! itself.

use crate::binder::Binder;

/// # Associated
/// Compile-time query for the associated property of kind `A` on a handler or
/// token, with a default candidate of type `D`.
///
/// `A` is a marker type naming the property kind (an allocator, a
/// cancellation slot, ...). Types that have no value for a given kind simply
/// do not implement the trait for it; generic consumers probe with a trait
/// bound. Implementations decide what, if anything, to do with the default
/// candidate.
pub trait Associated<A, D = ()> {
    /// The associated value's type.
    type Type;

    /// Gets the associated value, consulting `default` as the implementation
    /// sees fit.
    fn associated(&self, default: D) -> Self::Type;
}

/// # AssociatedImmediateExecutor
/// The immediate-executor query, a customization point of its own,
/// independent of [`Associated`].
///
/// A [`Binder`] stays transparent for every other property kind but always
/// answers this query with its own bound executor.
pub trait AssociatedImmediateExecutor<D> {
    /// The associated immediate executor's type.
    type Executor;

    /// Gets the associated immediate executor.
    fn immediate_executor(&self, default: D) -> Self::Executor;
}

// A binder is transparent for every associated-property query except the
// immediate-executor one: the query passes through to the wrapped target and
// the binder's own executor is ignored.
impl<A, D, T, E> Associated<A, D> for Binder<T, E>
where
    T: Associated<A, D>,
{
    type Type = T::Type;

    fn associated(&self, default: D) -> Self::Type {
        self.get().associated(default)
    }
}

// The bound executor always wins. The default candidate is never consulted,
// and an inner binding (or any association the target itself may have) is
// shadowed by the outermost one.
impl<D, T, E> AssociatedImmediateExecutor<D> for Binder<T, E>
where
    E: Clone,
{
    type Executor = E;

    fn immediate_executor(&self, _default: D) -> E {
        self.get_immediate_executor()
    }
}
