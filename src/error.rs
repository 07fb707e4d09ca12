//! Contains error types for the crate

use thiserror::Error;

/// # CompletionError
/// An error type returned when a promised completion can no longer be
/// delivered.
///
/// Every other failure mode in this crate is a compile-time rejection: an
/// incompatible construction, invocation, or query refuses to type-check
/// instead of failing at runtime.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CompletionError {
    #[error("The operation dropped its completion handler without completing")]
    Abandoned,
}
