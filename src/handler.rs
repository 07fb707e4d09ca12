//! # Handler
//! The invocation seam used for completion handlers, and the trait-extraction
//! helpers of the legacy functional-adapter convention.

/// # Handler
/// A completion handler that can be invoked exactly once with the argument
/// tuple `Args`.
///
/// Asynchronous machinery invokes handlers through this trait rather than
/// through the `Fn` traits directly, so that wrappers such as
/// [`Binder`](crate::Binder) can forward invocation without implementing the
/// `Fn` traits themselves. Plain closures, functions, and function pointers of
/// up to five arguments implement it out of the box.
pub trait Handler<Args> {
    /// The value produced by the handler.
    type Output;

    /// Invokes the handler, consuming it.
    fn complete(self, args: Args) -> Self::Output;
}

macro_rules! impl_handler {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg),*> Handler<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Ret,
        {
            type Output = Ret;

            fn complete(self, args: ($($arg,)*)) -> Ret {
                #[allow(non_snake_case)]
                let ($($arg,)*) = args;
                self($($arg),*)
            }
        }
    };
}

impl_handler!();
impl_handler!(A1);
impl_handler!(A1, A2);
impl_handler!(A1, A2, A3);
impl_handler!(A1, A2, A3, A4);
impl_handler!(A1, A2, A3, A4, A5);

/// # ResultType
/// Advertises a handler's result type, following the legacy functional
/// adapter convention.
///
/// Presence is opt-in: a type that does not advertise a result type simply
/// does not implement this trait, and generic code probes for it with a trait
/// bound instead of assuming it. Plain function pointers of zero, one, and two
/// arguments come with an implementation; pointers of higher arity
/// deliberately do not, mirroring the limit of the legacy convention.
///
/// A target that advertises nothing exposes nothing, even once wrapped:
///
/// ```compile_fail
/// use tether::{bind, InlineExecutor, ResultType};
///
/// fn probe<T: ResultType>(_: &T) {}
///
/// // Closures are not function pointers and advertise no result type.
/// let binder = bind(InlineExecutor, |x: i32| x + 1);
/// probe(&binder);
/// ```
pub trait ResultType {
    /// The handler's advertised result type.
    type Result;
}

/// # ArgumentType
/// Advertises the parameter type of a one-argument handler, following the
/// legacy functional adapter convention. Present only for types that opt in
/// and for one-argument function pointers.
pub trait ArgumentType {
    /// The handler's advertised parameter type.
    type Argument;
}

/// # ArgumentTypes
/// Advertises the parameter types of a two-argument handler, following the
/// legacy functional adapter convention. Present only for types that opt in
/// and for two-argument function pointers.
pub trait ArgumentTypes {
    /// The handler's advertised first parameter type.
    type First;

    /// The handler's advertised second parameter type.
    type Second;
}

impl<R> ResultType for fn() -> R {
    type Result = R;
}

impl<R, A1> ResultType for fn(A1) -> R {
    type Result = R;
}

impl<R, A1, A2> ResultType for fn(A1, A2) -> R {
    type Result = R;
}

impl<R, A1> ArgumentType for fn(A1) -> R {
    type Argument = A1;
}

impl<R, A1, A2> ArgumentTypes for fn(A1, A2) -> R {
    type First = A1;
    type Second = A2;
}
