//! # Initiate
//! The async-result initiation protocol: how an asynchronous operation is
//! started for a given completion token, and how a [`Binder`] token keeps its
//! executor attached to the handler the operation eventually invokes.

#[cfg(any(debug_tracing, release_tracing))]
use tracing::Level;

use crate::binder::Binder;
use crate::handler::Handler;

/// # Initiation
/// The strategy that starts the underlying asynchronous machinery once the
/// final completion handler is known.
///
/// An initiation is an explicit value passed to [`async_initiate`] at the
/// call site. Whatever extra arguments the operation needs are closed over by
/// the strategy itself. The machinery the strategy hands the handler to must
/// invoke it exactly once, on completion.
pub trait Initiation<H> {
    /// Starts the operation with `handler` as its completion handler.
    fn initiate(self, handler: H);
}

/// # InitiationFn
/// Adapts a plain closure as an [`Initiation`]. Created by [`initiation_fn`].
pub struct InitiationFn<F>(F);

impl<F, H> Initiation<H> for InitiationFn<F>
where
    F: FnOnce(H),
{
    fn initiate(self, handler: H) {
        (self.0)(handler);
    }
}

/// Wraps a closure as an [`Initiation`] strategy.
pub fn initiation_fn<F>(f: F) -> InitiationFn<F> {
    InitiationFn(f)
}

/// # CompletionToken
/// The async-result protocol: given a completion token and an operation whose
/// completion signature is the argument tuple `Args`, decide which handler
/// the initiation receives and what the initiating caller gets back.
///
/// Plain handlers act as their own token: any closure or function of up to
/// five arguments is a token whose handler is itself and whose return value
/// is `()`. Richer tokens (a [`Binder`](crate::Binder), the
/// [`Oneshot`](crate::Oneshot) flavor) substitute a different handler or a
/// different return value.
///
/// `initiate` consumes the token, so an adaptation is single-use and scoped
/// to one initiation by construction.
pub trait CompletionToken<Args>: Sized {
    /// The completion handler actually handed to the initiation.
    type Handler: Handler<Args>;

    /// The value returned to the initiating caller.
    type Return;

    /// Runs `initiation` for this token and produces the caller's return
    /// value.
    fn initiate<I>(self, initiation: I) -> Self::Return
    where
        I: Initiation<Self::Handler>;
}

macro_rules! impl_completion_token {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg),*> CompletionToken<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Ret,
        {
            type Handler = Func;
            type Return = ();

            fn initiate<I>(self, initiation: I)
            where
                I: Initiation<Func>,
            {
                initiation.initiate(self);
            }
        }
    };
}

impl_completion_token!();
impl_completion_token!(A1);
impl_completion_token!(A1, A2);
impl_completion_token!(A1, A2, A3);
impl_completion_token!(A1, A2, A3, A4);
impl_completion_token!(A1, A2, A3, A4, A5);

/// Runs an asynchronous initiation for `token`.
///
/// This is the entry point initiating functions call: the token decides which
/// handler the initiation receives and what the caller gets back.
///
/// ```
/// use tether::{async_initiate, initiation_fn};
///
/// async_initiate(
///     initiation_fn(|handler: fn(i32)| handler(7)),
///     (|x: i32| assert_eq!(x, 7)) as fn(i32),
/// );
/// ```
pub fn async_initiate<Args, T, I>(initiation: I, token: T) -> T::Return
where
    T: CompletionToken<Args>,
    I: Initiation<T::Handler>,
{
    token.initiate(initiation)
}

// Closes over the bound executor and the original initiation. Once the
// underlying machinery hands over the real handler, that handler is re-wrapped
// in a fresh binder carrying the executor, then forwarded. Exactly one re-wrap
// happens per initiation.
struct InitiationWrapper<E, I> {
    executor: E,
    initiation: I,
}

impl<E, I, H> Initiation<H> for InitiationWrapper<E, I>
where
    I: Initiation<Binder<H, E>>,
{
    fn initiate(self, handler: H) {
        self.initiation
            .initiate(Binder::new(self.executor, handler));
    }
}

// The adaptation for binder tokens. The inner token drives the underlying
// protocol exactly as it would unwrapped; only the handler comes back wearing
// the executor that was bound at initiation time.
impl<T, E, Args> CompletionToken<Args> for Binder<T, E>
where
    T: CompletionToken<Args>,
{
    type Handler = Binder<T::Handler, E>;
    type Return = T::Return;

    fn initiate<I>(self, initiation: I) -> Self::Return
    where
        I: Initiation<Self::Handler>,
    {
        let (executor, inner) = self.into_parts();

        crate::event!(
            Level::TRACE,
            "Initiating with a bound immediate executor"
        );

        async_initiate(
            InitiationWrapper {
                executor,
                initiation,
            },
            inner,
        )
    }
}
