//! Integration test common infrastructure.
//!
//! Provides a router wired to a recording sink, a switchable ghost flag and
//! a shared unread map, plus helpers for building permission sets.

pub mod harness;

#[allow(unused_imports)]
pub use harness::{TestRouter, chat_mask, permissions, select_mask};

/// Install a fmt subscriber once per test binary. Honors `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}
