//! Verbosity mapping and log subscriber setup
//!
//! Log output goes to stderr so that pruned lines and masks on stdout stay
//! clean. `RUST_LOG`, when set, takes precedence over the command-line level.

use crate::io::configuration::DEFAULT_LOG_LEVEL;
use crate::io::error::PruneError;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Map a net verbosity count (`verbose - quiet`) onto a log level
///
/// Zero keeps the default level; each step up or down moves one level, and
/// counts beyond either end saturate.
pub const fn verbosity_level(verbosity: i16) -> LevelFilter {
    match verbosity {
        i16::MIN..=-2 => LevelFilter::OFF,
        -1 => LevelFilter::ERROR,
        0 => DEFAULT_LOG_LEVEL,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Build the event filter for a level, honouring `RUST_LOG` when present
pub fn build_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Install the global stderr subscriber
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left in place.
pub fn init_logging(level: LevelFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}

/// Log a failure the way the top level reports it before exiting
pub fn report_error(err: &PruneError) {
    if err.is_domain_error() {
        error!("{err}");
    } else {
        debug!("{err:?}");
        error!("Unexpected error ({}): {err}", err.kind());
    }
}
