//! # Binder
//! The wrapper value that binds an immediate executor to a completion handler
//! or completion token.

use crate::handler::{ArgumentType, ArgumentTypes, Handler, ResultType};

/// # Binder
/// Binds the immediate executor `E` to the target `T`, owning both by value.
///
/// A binder stays invocable wherever its target was (see [`Handler`]), keeps
/// advertising the target's legacy adapter types ([`ResultType`] and
/// friends), and is transparent for every associated-property query except
/// the immediate-executor one, which it always answers with its own bound
/// executor.
///
/// Cloning a binder clones both the executor and the target; the clones are
/// independent values, nothing is shared. The executor is only ever stored
/// and queried here, never invoked.
#[derive(Debug, Clone)]
pub struct Binder<T, E> {
    /// The bound immediate executor
    executor: E,

    /// The wrapped target
    target: T,
}

impl<T, E> Binder<T, E> {
    /// Creates a binder over `target` with `executor` as its immediate
    /// executor.
    pub fn new(executor: E, target: T) -> Self {
        Self { executor, target }
    }

    /// Gets a reference to the wrapped target.
    pub fn get(&self) -> &T {
        &self.target
    }

    /// Gets a mutable reference to the wrapped target.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Gets a copy of the bound immediate executor.
    #[must_use]
    pub fn get_immediate_executor(&self) -> E
    where
        E: Clone,
    {
        self.executor.clone()
    }

    /// Consumes the binder, returning the executor and the target.
    pub fn into_parts(self) -> (E, T) {
        (self.executor, self.target)
    }

    /// Consumes the binder, returning only the wrapped target.
    pub fn into_target(self) -> T {
        self.target
    }

    /// Keeps the target but binds a different immediate executor, possibly of
    /// a different type. The outermost binding always wins when queried.
    pub fn rebind<F>(self, executor: F) -> Binder<T, F> {
        Binder {
            executor,
            target: self.target,
        }
    }

    /// Converts into a binder over compatible executor and target types.
    ///
    /// Only compiles when the destination executor type is constructible from
    /// `E` and the destination target type is constructible from `T`:
    ///
    /// ```compile_fail
    /// use tether::{bind, Binder, InlineExecutor};
    ///
    /// // `String` is not constructible from `i32`.
    /// let _: Binder<String, InlineExecutor> = bind(InlineExecutor, 7_i32).convert();
    /// ```
    pub fn convert<U, F>(self) -> Binder<U, F>
    where
        U: From<T>,
        F: From<E>,
    {
        Binder {
            executor: F::from(self.executor),
            target: U::from(self.target),
        }
    }
}

/// Binds `executor` as the immediate executor of `target`.
///
/// The returned [`Binder`] owns both by value.
///
/// ```
/// use tether::{bind, Handler, InlineExecutor};
///
/// let binder = bind(InlineExecutor, |x: i32| x + 1);
///
/// assert_eq!(binder.complete((41,)), 42);
/// ```
#[must_use]
pub fn bind<E, T>(executor: E, target: T) -> Binder<T, E> {
    Binder::new(executor, target)
}

// Invocation forwards to the target. The by-reference implementations mean a
// binder is invocable through a shared or exclusive reference whenever the
// target is; the executor plays no part in the call path.

impl<T, E, Args> Handler<Args> for Binder<T, E>
where
    T: Handler<Args>,
{
    type Output = T::Output;

    fn complete(self, args: Args) -> Self::Output {
        self.target.complete(args)
    }
}

impl<'a, T, E, Args> Handler<Args> for &'a Binder<T, E>
where
    &'a T: Handler<Args>,
{
    type Output = <&'a T as Handler<Args>>::Output;

    fn complete(self, args: Args) -> Self::Output {
        self.get().complete(args)
    }
}

impl<'a, T, E, Args> Handler<Args> for &'a mut Binder<T, E>
where
    &'a mut T: Handler<Args>,
{
    type Output = <&'a mut T as Handler<Args>>::Output;

    fn complete(self, args: Args) -> Self::Output {
        (&mut self.target).complete(args)
    }
}

// The legacy adapter types pass through unchanged whenever the target
// advertises them.

impl<T, E> ResultType for Binder<T, E>
where
    T: ResultType,
{
    type Result = T::Result;
}

impl<T, E> ArgumentType for Binder<T, E>
where
    T: ArgumentType,
{
    type Argument = T::Argument;
}

impl<T, E> ArgumentTypes for Binder<T, E>
where
    T: ArgumentTypes,
{
    type First = T::First;
    type Second = T::Second;
}
