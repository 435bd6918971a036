//! Explicit logging initialisation.
//!
//! The subscriber is constructed once at process start with a
//! caller-supplied verbosity level; no component inspects the environment
//! to decide how much to log.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs the global tracing subscriber at the given verbosity.
///
/// Returns `false` when a subscriber is already installed, leaving the
/// existing one in place.
pub fn init(level: Level) -> bool {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
