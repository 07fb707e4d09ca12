//! # Tether
//! Binds immediate executors to asynchronous completion handlers.
//!
//! An *immediate executor* is an execution context that may be asked to run a
//! continuation inline, right when it becomes ready, instead of deferring to a
//! general scheduling policy. Outer asynchronous machinery that knows which
//! immediate executor accompanies a handler can choose inline dispatch; Tether
//! is the adapter that carries that association, not the machinery that acts
//! on it.
//!
//! ## Binding
//! [`bind`] wraps any completion handler (or completion token) together with
//! an executor handle in a [`Binder`]. The binder stays invocable wherever the
//! target was, keeps advertising whatever the target advertises about itself,
//! and answers the immediate-executor query with the bound executor:
//!
//! ```
//! use tether::{bind, Handler, InlineExecutor};
//!
//! let binder = bind(InlineExecutor, |x: i32| x + 1);
//!
//! assert_eq!(binder.get_immediate_executor(), InlineExecutor);
//! assert_eq!(binder.complete((41,)), 42);
//! ```
//!
//! ## Initiation
//! When a binder is used as a completion token, the adaptation in
//! [`initiate`](crate::initiate) unwraps it one level for the underlying
//! protocol and re-wraps the real handler with the bound executor right before
//! the original initiation runs it, so the handler that the machinery
//! eventually invokes still carries the association:
//!
//! ```
//! use tether::{async_initiate, bind, initiation_fn, AssociatedImmediateExecutor,
//!     Binder, Handler, InlineExecutor};
//!
//! let token = bind(InlineExecutor, |x: i32| assert_eq!(x, 42));
//!
//! async_initiate(
//!     initiation_fn(|handler: Binder<_, InlineExecutor>| {
//!         // The machinery can recover the association before invoking.
//!         assert_eq!(handler.immediate_executor(()), InlineExecutor);
//!         handler.complete((42,));
//!     }),
//!     token,
//! );
//! ```
//!
//! ## Association
//! Generic code discovers the executor through the
//! [`AssociatedImmediateExecutor`] query. Every other associated-property
//! query ([`Associated`]) passes through the binder to its target untouched.

#![no_std]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// The implementation of the binder wrapper and the [`bind`] construction function.
pub mod binder;

/// The invocation seam for completion handlers, and the legacy adapter traits.
pub mod handler;

/// The associator customization points.
pub mod associated;

/// The async-result initiation protocol.
pub mod initiate;

/// The immediate-executor contract and a trivial inline executor.
pub mod executor;

/// The promise/future completion-token flavor.
#[cfg(oneshot)]
pub mod oneshot;

/// Contains error types for the crate
#[cfg(oneshot)]
pub mod error;

// If traces should survive into optimized builds, use the real event macro.
#[cfg(any(release_tracing, debug_tracing))]
pub(crate) use tracing::event;

// If release tracing is not enabled and debug assertions are off,
// then we want to ignore Level::TRACE. So lets create a macro to do so.
#[cfg(all(tracing, not(release_tracing), not(debug_tracing)))]
#[macro_export]
macro_rules! event {
    (Level::TRACE, $($_:tt)*) => {};
    ($($x:tt)*) => {
        tracing::event!($($x)*)
    };
}

// Otherwise define a dummy event macro.
#[cfg(not(tracing))]
#[macro_export]
macro_rules! event {
    ($($_:tt)*) => {};
}



pub use binder::{bind, Binder};

pub use handler::{ArgumentType, ArgumentTypes, Handler, ResultType};

pub use associated::{Associated, AssociatedImmediateExecutor};

pub use initiate::{async_initiate, initiation_fn, CompletionToken, Initiation, InitiationFn};

pub use executor::{ImmediateExecutor, InlineExecutor};

#[cfg(oneshot)]
pub use oneshot::{Completion, Oneshot, Promise};

#[cfg(oneshot)]
pub use error::CompletionError;
