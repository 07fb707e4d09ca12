use tether::{bind, ArgumentType, ArgumentTypes, InlineExecutor, ResultType};

/// Target advertising its types through the legacy adapter convention.
struct Legacy;

impl ResultType for Legacy {
    type Result = bool;
}

impl ArgumentType for Legacy {
    type Argument = u8;
}

fn result_is<T: ResultType<Result = R>, R>(_: &T) {}
fn argument_is<T: ArgumentType<Argument = A>, A>(_: &T) {}
fn arguments_are<T: ArgumentTypes<First = A, Second = B>, A, B>(_: &T) {}

fn ready() -> bool {
    true
}

fn negate(x: i32) -> i64 {
    -i64::from(x)
}

fn add(x: i32, y: u16) -> i64 {
    i64::from(x) + i64::from(y)
}

#[test]
fn advertised_types_pass_through() {
    let binder = bind(InlineExecutor, Legacy);

    result_is::<_, bool>(&binder);
    argument_is::<_, u8>(&binder);
}

#[test]
fn zero_argument_function_pointers_advertise_a_result() {
    let binder = bind(InlineExecutor, ready as fn() -> bool);

    result_is::<_, bool>(&binder);
}

#[test]
fn one_argument_function_pointers_advertise() {
    let binder = bind(InlineExecutor, negate as fn(i32) -> i64);

    result_is::<_, i64>(&binder);
    argument_is::<_, i32>(&binder);
}

#[test]
fn two_argument_function_pointers_advertise() {
    let binder = bind(InlineExecutor, add as fn(i32, u16) -> i64);

    result_is::<_, i64>(&binder);
    arguments_are::<_, i32, u16>(&binder);
}
