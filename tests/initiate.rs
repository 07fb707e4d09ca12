mod common;

use std::cell::Cell;

use common::Labeled;
use tether::{
    async_initiate, bind, initiation_fn, AssociatedImmediateExecutor, Binder, Handler,
};

#[test]
fn rewrapped_handler_carries_the_bound_executor() {
    let _ = tracing_subscriber::fmt::try_init();

    let seen = Cell::new(None);
    let delivered = Cell::new(0);

    async_initiate(
        initiation_fn(|handler: Binder<_, Labeled>| {
            seen.set(Some(handler.immediate_executor(())));
            handler.complete((41,));
        }),
        bind(Labeled("io"), |x: i32| delivered.set(x)),
    );

    assert_eq!(seen.get(), Some(Labeled("io")));
    assert_eq!(delivered.get(), 41);
}

#[test]
fn nested_bindings_report_the_outermost_executor() {
    let seen = Cell::new(None);
    let invoked = Cell::new(false);

    async_initiate(
        initiation_fn(|handler: Binder<Binder<_, Labeled>, Labeled>| {
            seen.set(Some(handler.immediate_executor(())));
            handler.complete(());
        }),
        bind(Labeled("outer"), bind(Labeled("inner"), || invoked.set(true))),
    );

    assert_eq!(seen.get(), Some(Labeled("outer")));
    assert!(invoked.get());
}

#[test]
fn plain_handlers_are_their_own_token() {
    let delivered = Cell::new(0);

    async_initiate(
        initiation_fn(|handler| Handler::complete(handler, (7, 8))),
        |x: i32, y: i32| delivered.set(x + y),
    );

    assert_eq!(delivered.get(), 15);
}

#[test]
fn initiation_chooses_when_to_invoke() {
    let delivered = Cell::new(0);
    let mut parked = None;

    async_initiate(
        initiation_fn(|handler: Binder<_, Labeled>| parked = Some(handler)),
        bind(Labeled("later"), |x: i32| delivered.set(x)),
    );

    // Nothing ran yet; the association waits with the parked handler.
    assert_eq!(delivered.get(), 0);

    let handler = parked.take().unwrap();

    assert_eq!(handler.immediate_executor(()), Labeled("later"));

    handler.complete((9,));

    assert_eq!(delivered.get(), 9);
}
