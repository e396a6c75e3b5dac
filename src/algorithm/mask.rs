//! Dithered keep/drop mask generation
//!
//! Each position adds its target density to a running accumulator. Once the
//! accumulator reaches the keep threshold the position is kept and one unit is
//! paid back, so fractional density is carried forward instead of being
//! rounded away. Over any prefix the number of kept positions stays within half
//! a unit of the accumulated density whenever `scale <= 1`.

use crate::io::configuration::{
    DEFAULT_FACTOR, DEFAULT_SCALE, INITIAL_ACCUMULATOR, KEEP_COST, KEEP_THRESHOLD,
};
use crate::io::error::{PruneError, Result, invalid_parameter, invalid_size};
use crate::math::density::{PowerCurve, progress};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Shape and strength of the retention density curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParameters {
    /// Steepness exponent; 0 is linear, positive back-loads, negative front-loads
    pub factor: f64,
    /// Multiplier applied to the curve's density at every position
    pub scale: f64,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            factor: DEFAULT_FACTOR,
            scale: DEFAULT_SCALE,
        }
    }
}

impl CurveParameters {
    /// Create parameters from an explicit factor and scale
    pub const fn new(factor: f64, scale: f64) -> Self {
        Self { factor, scale }
    }

    /// Replace the steepness factor
    #[must_use]
    pub const fn with_factor(self, factor: f64) -> Self {
        Self { factor, ..self }
    }

    /// Replace the density multiplier
    #[must_use]
    pub const fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Check that the parameters describe a usable curve
    ///
    /// # Errors
    ///
    /// Returns [`PruneError::InvalidParameter`] if the factor is not finite and
    /// [`PruneError::InvalidScale`] if the scale is not a finite positive number
    pub fn validate(&self) -> Result<()> {
        if !self.factor.is_finite() {
            return Err(invalid_parameter(
                "factor",
                &self.factor,
                &"must be a finite number",
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(PruneError::InvalidScale { scale: self.scale });
        }
        Ok(())
    }
}

/// Lazily produced keep/drop decisions for a fixed number of positions
///
/// Yields `true` for positions to keep. All state is private to one pass;
/// build a new instance for another pass.
#[derive(Debug, Clone)]
pub struct DitheredCurve {
    curve: PowerCurve,
    scale: f64,
    size: usize,
    index: usize,
    accumulator: f64,
}

impl DitheredCurve {
    /// Create a mask over `size` positions
    ///
    /// # Errors
    ///
    /// Returns an error if the curve parameters fail validation
    pub fn new(size: usize, params: &CurveParameters) -> Result<Self> {
        params.validate()?;
        debug!(
            size,
            factor = params.factor,
            scale = params.scale,
            "Generating dithered mask"
        );

        Ok(Self {
            curve: PowerCurve::new(params.factor),
            scale: params.scale,
            size,
            index: 0,
            accumulator: INITIAL_ACCUMULATOR,
        })
    }

    /// Total number of positions this mask classifies
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of positions already classified
    pub const fn position(&self) -> usize {
        self.index
    }

    /// Carried rounding error after the positions classified so far
    pub const fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Convert the remaining decisions to numeric form (1 = keep, 0 = drop)
    pub fn into_bits(self) -> impl ExactSizeIterator<Item = u8> {
        self.map(u8::from)
    }
}

impl Iterator for DitheredCurve {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.index >= self.size {
            return None;
        }

        let density = self.curve.density(progress(self.index, self.size));
        self.accumulator += density * self.scale;

        let keep = self.accumulator >= KEEP_THRESHOLD;
        if keep {
            self.accumulator -= KEEP_COST;
        }

        trace!(
            index = self.index,
            density,
            keep,
            accumulator = self.accumulator,
            "Classified position"
        );
        self.index += 1;

        Some(keep)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DitheredCurve {}

impl FusedIterator for DitheredCurve {}

/// Generate the keep/drop mask for `size` positions
///
/// # Errors
///
/// Returns an error if the curve parameters fail validation; nothing is
/// generated in that case
pub fn generate_mask(size: usize, params: &CurveParameters) -> Result<DitheredCurve> {
    DitheredCurve::new(size, params)
}

/// Convert a signed, caller-supplied size into a mask length
///
/// # Errors
///
/// Returns [`PruneError::InvalidSize`] for negative sizes or sizes beyond the
/// platform's addressable range
pub fn validate_size(size: i64) -> Result<usize> {
    if size < 0 {
        return Err(invalid_size(size, &"must not be negative"));
    }
    usize::try_from(size).map_err(|err| invalid_size(size, &err))
}

/// Number of kept positions the accumulated density calls for
///
/// This is the initial carry plus the scaled density summed over all
/// positions. While `scale <= 1` the realized keep count never differs from it
/// by more than one half.
pub fn expected_keep_count(size: usize, params: &CurveParameters) -> f64 {
    let curve = PowerCurve::new(params.factor);
    let total: f64 = (0..size)
        .map(|index| curve.density(progress(index, size)) * params.scale)
        .sum();
    INITIAL_ACCUMULATOR + total
}
