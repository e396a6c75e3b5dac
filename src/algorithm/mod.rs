//! Error-diffusion selection along a density curve

/// Keep/drop mask generation with carried rounding error
pub mod mask;
/// Order-preserving sequence filtering driven by a mask
pub mod prune;
