//! Deterministic error-diffusion subsampling along a density curve
//!
//! Given a sequence of N items and a smooth target density curve, the crate
//! selects a subset whose local density follows the curve. Rounding error is
//! carried from one position to the next rather than discarded, so the
//! realized keep count tracks the requested density without systematic bias.

#![forbid(unsafe_code)]

/// Keep/drop mask generation and sequence pruning
pub mod algorithm;
/// Command-line surface, configuration, logging and error handling
pub mod io;
/// Density curve evaluation
pub mod math;

pub use algorithm::mask::{CurveParameters, DitheredCurve, generate_mask};
pub use algorithm::prune::{Prune, PruneExt, prune};
pub use io::error::{PruneError, Result};
