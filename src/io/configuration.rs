//! Curve defaults and runtime constants

use tracing_subscriber::filter::LevelFilter;

// Default values for configurable parameters
/// Curve steepness used when none is given (mildly back-loaded)
pub const DEFAULT_FACTOR: f64 = 1.0;
/// Retention density multiplier used when none is given
pub const DEFAULT_SCALE: f64 = 1.0;

// Error-diffusion state
/// Accumulator value before the first position is classified
pub const INITIAL_ACCUMULATOR: f64 = 1.0;
/// Accumulated density at or above which a position is kept
pub const KEEP_THRESHOLD: f64 = 0.5;
/// Amount removed from the accumulator for every kept position
pub const KEEP_COST: f64 = 1.0;

// Process exit codes
/// Exit code for malformed parameters and other domain errors
pub const EXIT_DOMAIN_ERROR: u8 = 64;
/// Exit code when the run was interrupted by the user
pub const EXIT_INTERRUPTED: u8 = 130;
/// Exit code for anything not anticipated
pub const EXIT_UNEXPECTED: u8 = 1;

// Logging
/// Log level when neither `--verbose` nor `--quiet` is given
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

// Command-line conventions
/// Path argument standing for stdin or stdout
pub const STDIO_PATH: &str = "-";
