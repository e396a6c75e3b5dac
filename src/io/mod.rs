//! Input/output operations, configuration and error handling

/// Command-line interface and command execution
pub mod cli;
/// Curve defaults, selection constants and exit codes
pub mod configuration;
/// Error types for mask generation and pruning
pub mod error;
/// Verbosity handling and log subscriber setup
pub mod logging;
