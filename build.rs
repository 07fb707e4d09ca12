use cfg_aliases::cfg_aliases;

fn main() {
    // Setup cfg aliases
    cfg_aliases! {
        // Features
        oneshot: { feature = "oneshot" },
        // Tracing support
        tracing: { feature = "tracing" },
        release_tracing: { all(tracing, feature = "release-tracing") },
        // Disable various traces on release versions
        debug_tracing: { all(tracing, not(release_tracing), debug_assertions) }
    }
}
