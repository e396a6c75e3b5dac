//! Symmetric power-curve density profile
//!
//! Maps a normalized position in `[0, 1]` onto a target retention fraction in
//! `[0, 1]`. The curve is `(1 - (1 - x)^p)^q` with `p = 2^-factor` and
//! `q = 2^factor`, so `factor = 0` is the identity, positive factors push
//! density towards the end of the sequence and negative factors towards the
//! start. Both endpoints are fixed: `density(0) = 0` and `density(1) = 1`.

/// Exponent pair derived from a curve factor
///
/// Computing `2^-factor` and `2^factor` once per sequence keeps the per-position
/// evaluation down to two `powf` calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerCurve {
    inner_exponent: f64,
    outer_exponent: f64,
}

impl PowerCurve {
    /// Build the curve for a given steepness factor
    pub fn new(factor: f64) -> Self {
        Self {
            inner_exponent: 2.0_f64.powf(-factor),
            outer_exponent: 2.0_f64.powf(factor),
        }
    }

    /// Target density at a normalized position
    ///
    /// Positions outside `[0, 1]` are clamped to the nearest endpoint.
    pub fn density(&self, progress: f64) -> f64 {
        let x = progress.clamp(0.0, 1.0);
        (1.0 - (1.0 - x).powf(self.inner_exponent)).powf(self.outer_exponent)
    }

    /// Exponent applied to the complement of the position
    pub const fn inner_exponent(&self) -> f64 {
        self.inner_exponent
    }

    /// Exponent applied to the whole expression
    pub const fn outer_exponent(&self) -> f64 {
        self.outer_exponent
    }
}

/// Evaluate the density curve for a single position without caching exponents
pub fn density(progress: f64, factor: f64) -> f64 {
    PowerCurve::new(factor).density(progress)
}

/// Normalize a position index onto `[0, 1]`
///
/// The first index maps to 0 and the last to 1. A sequence of length one has
/// no span to divide, so its only position maps to 0.
pub fn progress(index: usize, size: usize) -> f64 {
    if size <= 1 {
        return 0.0;
    }
    index as f64 / (size - 1) as f64
}
