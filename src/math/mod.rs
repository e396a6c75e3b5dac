//! Mathematical utilities for the algorithm

/// Power-curve density profile and position normalization
pub mod density;
