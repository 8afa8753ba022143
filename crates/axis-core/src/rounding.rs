// File: crates/axis-core/src/rounding.rs
// Summary: Round-off tolerant floor/ceil and the pieces every solver shares
// (magnitude decomposition, tick-index snapping, centering, coverage clamp).

use log::{trace, warn};

use crate::axis::AxisKind;
use crate::error::{Result, ScaleError};
use crate::types::{AxisRange, ScaleResult};

/// Tick indices beyond this no longer map to distinct `f64` tick values.
const MAX_TICK_INDEX: f64 = (1u64 << 53) as f64;

/// Largest integer `<= x`, except that a value within `tolerance` below the
/// next integer snaps up to it (`2.9999999999` -> 3).
pub fn tolerant_floor(x: f64, tolerance: f64) -> i64 {
    let m = x.floor();
    if (m + 1.0 - x).abs() < tolerance { m as i64 + 1 } else { m as i64 }
}

/// Smallest integer `>= x`, except that a value within `tolerance` above the
/// previous integer snaps down to it (`3.0000000001` -> 3).
pub fn tolerant_ceil(x: f64, tolerance: f64) -> i64 {
    let m = x.floor() + 1.0;
    if (x + 1.0 - m).abs() < tolerance { m as i64 - 1 } else { m as i64 }
}

/// `a = mantissa * 10^exponent`, with the mantissa in `[1, 10]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Magnitude {
    pub exponent: i32,
    pub mantissa: f64,
}

impl Magnitude {
    /// Decompose a strictly positive, normal value. Zero, subnormal and
    /// non-finite inputs (a raw step that under- or overflowed) are rejected.
    ///
    /// Sub-unit values take one extra decrement so that an exact negative
    /// power of ten lands on a mantissa of 10 rather than 1; the candidate
    /// scans rely on that.
    pub fn of(a: f64) -> Result<Self> {
        if !a.is_normal() || a < 0.0 {
            return Err(ScaleError::Unrepresentable { what: "raw step", value: a });
        }
        let mut exponent = a.log10().trunc() as i32;
        if a < 1.0 { exponent -= 1; }
        let mantissa = a / pow10(exponent);
        trace!("decomposed {a} into {mantissa} x 10^{exponent}");
        Ok(Self { exponent, mantissa })
    }

    pub fn scale(&self) -> f64 { pow10(self.exponent) }
}

#[inline]
pub(crate) fn pow10(e: i32) -> f64 {
    10f64.powf(e as f64)
}

/// Tick indices of the lowest tick at or below `range.min` and the highest
/// tick at or above `range.max` for the given step. Fails when the step is
/// not a usable positive number or the indices lose integer precision.
pub(crate) fn snap_indices(range: &AxisRange, step: f64, tolerance: f64) -> Result<(i64, i64)> {
    if !step.is_normal() || step < 0.0 {
        return Err(ScaleError::Unrepresentable { what: "step", value: step });
    }
    let (lo, hi) = (range.min / step, range.max / step);
    if let Some(&x) = [lo, hi].iter().find(|x| !(x.abs() < MAX_TICK_INDEX)) {
        return Err(ScaleError::Unrepresentable { what: "tick index", value: x });
    }
    Ok((tolerant_floor(lo, tolerance), tolerant_ceil(hi, tolerance)))
}

/// Place an exactly `n`-interval window over the `[m1, m1 + np]` span found by
/// a scan, splitting the deficit `n - np` evenly on both sides.
pub(crate) fn center_window(m1: i64, np: i64, n: usize, step: f64) -> (f64, f64) {
    let offset = (n as i64 - np) / 2;
    let lo = step * m1 as f64 - offset as f64 * step;
    (lo, lo + n as f64 * step)
}

/// Widen `(lo, hi)` so it never fails to enclose `range`.
pub(crate) fn cover(lo: f64, hi: f64, range: &AxisRange) -> (f64, f64) {
    let mut lo = lo;
    let mut hi = hi;
    if lo > range.min {
        warn!("round-off left adjusted min {lo} above {}; clamping", range.min);
        lo = range.min;
    }
    if hi < range.max {
        warn!("round-off left adjusted max {hi} below {}; clamping", range.max);
        hi = range.max;
    }
    (lo, hi)
}

/// Last gate before a solver returns: bounds and step must be finite, and a
/// logarithmic result needs a positive minimum and a ratio above 1.
pub(crate) fn finish(lo: f64, hi: f64, step: f64, kind: AxisKind) -> Result<ScaleResult> {
    if !lo.is_finite() {
        return Err(ScaleError::Unrepresentable { what: "adjusted min", value: lo });
    }
    if !hi.is_finite() {
        return Err(ScaleError::Unrepresentable { what: "adjusted max", value: hi });
    }
    let step_ok = match kind {
        AxisKind::Linear => step.is_finite() && step > 0.0,
        AxisKind::Logarithmic => step.is_finite() && step > 1.0,
    };
    if !step_ok {
        return Err(ScaleError::Unrepresentable { what: "step", value: step });
    }
    if kind == AxisKind::Logarithmic && lo <= 0.0 {
        return Err(ScaleError::Unrepresentable { what: "adjusted min", value: lo });
    }
    Ok(ScaleResult { adjusted_min: lo, adjusted_max: hi, step, kind })
}

/// Reject interval counts below what the calling solver supports.
pub(crate) fn require_intervals(n: usize, min_required: usize) -> Result<()> {
    if n < min_required {
        return Err(ScaleError::InvalidTickCount { n, min_required });
    }
    Ok(())
}

pub(crate) fn validate_tolerance(tolerance: f64) -> Result<()> {
    if !tolerance.is_finite() || !(0.0..0.5).contains(&tolerance) {
        return Err(ScaleError::InvalidTolerance(tolerance));
    }
    Ok(())
}
