mod common;

use common::Labeled;
use tether::{bind, Binder, Handler, ImmediateExecutor, InlineExecutor};

#[test]
fn outer_executor_wins() {
    let binder = bind(Labeled("outer"), bind(Labeled("inner"), |x: i32| x + 1));

    assert_eq!(binder.get_immediate_executor(), Labeled("outer"));
    assert_eq!(binder.get().get_immediate_executor(), Labeled("inner"));
}

#[test]
fn target_reference_is_stable() {
    let binder = bind(InlineExecutor, String::from("handler"));

    assert!(core::ptr::eq(binder.get(), binder.get()));
}

#[test]
fn clones_are_independent() {
    let binder = bind(InlineExecutor, vec![1]);
    let mut clone = binder.clone();

    clone.get_mut().push(2);

    assert_eq!(binder.get(), &[1]);
    assert_eq!(clone.get(), &[1, 2]);
}

#[test]
fn moving_transfers_both_halves() {
    let binder = bind(Labeled("io"), String::from("handler"));

    let (executor, target) = binder.into_parts();

    assert_eq!(executor, Labeled("io"));
    assert_eq!(target, "handler");
}

#[test]
fn invocation_forwards_to_the_target() {
    let binder = bind(Labeled("io"), |x: i32| x + 1);

    assert_eq!(binder.complete((41,)), 42);
}

#[test]
fn invocation_through_a_shared_reference() {
    let binder = bind(InlineExecutor, |x: i32| x * 2);

    // The target is `Fn`, so the binder stays invocable by reference.
    assert_eq!(Handler::complete(&binder, (3,)), 6);
    assert_eq!(Handler::complete(&binder, (4,)), 8);
    assert_eq!(binder.complete((5,)), 10);
}

#[test]
fn rebinding_replaces_only_the_executor() {
    let binder = bind(Labeled("first"), |x: i32| x - 1).rebind(Labeled("second"));

    assert_eq!(binder.get_immediate_executor(), Labeled("second"));
    assert_eq!(binder.complete((1,)), 0);
}

#[test]
fn conversion_requires_constructible_halves() {
    let binder: Binder<i64, Labeled> = bind(Labeled("io"), 7_i32).convert();

    assert_eq!(binder.get_immediate_executor(), Labeled("io"));
    assert_eq!(*binder.get(), 7_i64);
}

#[test]
fn inline_executor_runs_inline() {
    let mut ran = false;

    InlineExecutor.execute(|| ran = true);

    assert!(ran);
}
