//! Tracing setup.
//!
//! Stdout carries the game protocol, so every log line goes to stderr.

use std::io;

use tracing::{subscriber::set_global_default, Level};
use tracing_subscriber::FmtSubscriber;

/// Installs a stderr `fmt` subscriber at the given level.
///
/// Returns an error if a global subscriber is already set.
pub fn init(level: Level) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    set_global_default(subscriber)
}
