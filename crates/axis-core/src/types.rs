// File: crates/axis-core/src/types.rs
// Summary: Value types consumed and produced by the solvers (range, result).

use crate::axis::AxisKind;
use crate::error::{Result, ScaleError};

/// Data interval to be divided into ticks.
/// Contract: both bounds finite, `max > min`, and the span itself finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Build without checking; solvers validate on entry.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Build a range, rejecting inverted, empty or non-finite bounds.
    pub fn try_new(min: f64, max: f64) -> Result<Self> {
        let r = Self { min, max };
        r.validate()?;
        Ok(r)
    }

    pub fn validate(&self) -> Result<()> {
        let finite = self.min.is_finite() && self.max.is_finite() && self.span().is_finite();
        // `!(a > b)` also rejects NaN
        if !finite || !(self.max > self.min) {
            return Err(ScaleError::InvalidRange { min: self.min, max: self.max });
        }
        Ok(())
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Both bounds multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self { min: self.min * factor, max: self.max * factor }
    }
}

/// Solved axis: widened bounds and the spacing between ticks.
///
/// For [`AxisKind::Linear`] `step` is an additive spacing; for
/// [`AxisKind::Logarithmic`] it is the ratio between adjacent ticks.
/// Contract: `adjusted_min <= range.min`, `adjusted_max >= range.max`, `step > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleResult {
    pub adjusted_min: f64,
    pub adjusted_max: f64,
    pub step: f64,
    pub kind: AxisKind,
}

impl ScaleResult {
    /// True when the solved bounds enclose `range`.
    pub fn covers(&self, range: &AxisRange) -> bool {
        self.adjusted_min <= range.min && self.adjusted_max >= range.max
    }

    /// Number of intervals between `adjusted_min` and `adjusted_max`.
    pub fn interval_count(&self) -> usize {
        let raw = match self.kind {
            AxisKind::Linear => (self.adjusted_max - self.adjusted_min) / self.step,
            AxisKind::Logarithmic => (self.adjusted_max / self.adjusted_min).log10() / self.step.log10(),
        };
        if raw.is_finite() && raw > 0.0 { raw.round() as usize } else { 0 }
    }
}
