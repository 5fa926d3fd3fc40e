//! mspass command-line application — thin shell over `mspass-core`.
//!
//! Argument parsing lives in `main.rs`; this crate exposes the command
//! handlers and terminal input helpers so they can be tested directly.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod commands;
pub mod input;

/// Install the `tracing` subscriber.
///
/// Filters come from `RUST_LOG`, defaulting to `warn`. Output goes to stderr
/// so it never mixes with a derived password on stdout. Repeated calls are
/// ignored.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
