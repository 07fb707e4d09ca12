use tether::ImmediateExecutor;

/// Executor handle with value identity, so tests can check which execution
/// context a handler ended up associated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labeled(pub &'static str);

impl ImmediateExecutor for Labeled {
    fn execute<F: FnOnce()>(&self, f: F) {
        f();
    }
}
