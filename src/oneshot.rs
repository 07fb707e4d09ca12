//! # Oneshot
//! A completion-token flavor whose initiating caller receives a future for
//! the operation's single completion value, instead of `()`.
//!
//! This is the flavor that exercises the return-value half of the initiation
//! protocol: the handler handed to the initiation is a [`Promise`], and the
//! caller keeps a [`Completion`] that resolves once the promise is completed.
//! Binding works transitively: `bind(executor, Oneshot)` initiates with a
//! `Binder<Promise<T>, E>` handler and still returns the future.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

#[cfg(any(debug_tracing, release_tracing))]
use tracing::Level;

use crate::error::CompletionError;
use crate::handler::Handler;
use crate::initiate::{CompletionToken, Initiation};

/// # Oneshot
/// Completion token requesting a future as the operation's return value.
///
/// ```
/// use tether::{async_initiate, initiation_fn, Handler, Oneshot, Promise};
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let completion = async_initiate(
///     initiation_fn(|promise: Promise<i32>| promise.complete((42,))),
///     Oneshot,
/// );
///
/// assert_eq!(completion.await, Ok(42));
/// # });
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Oneshot;

/// # Promise
/// The handler half of [`Oneshot`]: delivers the operation's single
/// completion value. Operations that complete with several values deliver
/// them as one tuple.
pub struct Promise<T> {
    sender: async_oneshot::Sender<T>,
}

impl<T> Handler<(T,)> for Promise<T> {
    type Output = ();

    fn complete(mut self, args: (T,)) {
        crate::event!(Level::TRACE, "Delivering a promised completion");

        // The receiving side may already have lost interest; there is nobody
        // left to notify then.
        let _ = self.sender.send(args.0);
    }
}

/// # Completion
/// Future for a promised completion value.
///
/// Resolves with [`CompletionError::Abandoned`] if the operation drops its
/// [`Promise`] without completing it.
pub struct Completion<T> {
    receiver: async_oneshot::Receiver<T>,
}

impl<T> Future for Completion<T> {
    type Output = Result<T, CompletionError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|delivered| delivered.or(Err(CompletionError::Abandoned)))
    }
}

impl<T> CompletionToken<(T,)> for Oneshot {
    type Handler = Promise<T>;
    type Return = Completion<T>;

    fn initiate<I>(self, initiation: I) -> Completion<T>
    where
        I: Initiation<Promise<T>>,
    {
        let (sender, receiver) = async_oneshot::oneshot();

        initiation.initiate(Promise { sender });

        Completion { receiver }
    }
}
