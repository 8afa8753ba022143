// File: crates/axis-core/src/logarithmic.rs
// Summary: Logarithmic axis solver with an exact interval count (SCALE3).
//
// The range is moved into log10 space, solved there with the exact-count
// scan, and moved back. In log space a candidate `c` stands for the step
// `10^(p+1) / c`, so candidates run from coarse to fine (10, 9, ..., 1, 0.5)
// while the steps they produce ascend.
//
// The exponent `p + 1` is taken once from the raw log step and held for the
// whole scan; the default candidates already cover steps from 1x to 20x of
// `10^p`, enough for any mantissa in [1, 10].

use log::{debug, trace};

use crate::axis::AxisKind;
use crate::config::LOG_ROUNDOFF;
use crate::error::{Result, ScaleError};
use crate::rounding::{
    center_window, cover, finish, pow10, require_intervals, snap_indices, validate_tolerance, Magnitude,
};
use crate::types::{AxisRange, ScaleResult};

/// Bounds and tick ratio for exactly `n` logarithmic intervals covering `range`.
///
/// The returned `step` is the ratio between adjacent ticks.
pub fn solve_log(range: AxisRange, n: usize, candidates: &[f64]) -> Result<ScaleResult> {
    solve_log_with_tolerance(range, n, candidates, LOG_ROUNDOFF)
}

pub fn solve_log_with_tolerance(
    range: AxisRange,
    n: usize,
    candidates: &[f64],
    tolerance: f64,
) -> Result<ScaleResult> {
    range.validate()?;
    if range.min <= 0.0 {
        return Err(ScaleError::NonPositiveLogMinimum { min: range.min });
    }
    require_intervals(n, 2)?;
    validate_candidates(candidates)?;
    validate_tolerance(tolerance)?;

    let log_range = AxisRange::new(range.min.log10(), range.max.log10());
    // Bounds closer than one ulp apart collapse after log10.
    if !(log_range.max > log_range.min) {
        return Err(ScaleError::InvalidRange { min: range.min, max: range.max });
    }

    let mag = Magnitude::of(log_range.span() / n as f64)?;
    let decade = pow10(mag.exponent + 1);
    let last = candidates.len() - 1;
    let start = candidates[..last]
        .iter()
        .position(|&c| mag.mantissa < 10.0 / c + tolerance)
        .unwrap_or(last);

    for &c in &candidates[start..] {
        let step_l = decade / c;
        let (m1, m2) = snap_indices(&log_range, step_l, tolerance)?;
        let np = m2 - m1;
        trace!("candidate {c}: log step={step_l} ticks [{m1}, {m2}] -> {np} intervals");
        if np <= n as i64 {
            let (lo_l, hi_l) = center_window(m1, np, n, step_l);
            let (lo, hi) = cover(10f64.powf(lo_l), 10f64.powf(hi_l), &range);
            // 10^x under- or overflows well inside the log-space range
            let result = finish(lo, hi, 10f64.powf(step_l), AxisKind::Logarithmic)?;
            debug!("log exact {range:?} n={n} -> {result:?}");
            return Ok(result);
        }
    }
    Err(ScaleError::CandidatesExhausted { n, candidates: candidates.len() })
}

/// Log candidates must be non-empty, finite, positive and strictly descending.
pub fn validate_candidates(candidates: &[f64]) -> Result<()> {
    if candidates.is_empty() {
        return Err(ScaleError::InvalidCandidates("empty candidate list".into()));
    }
    if let Some(c) = candidates.iter().find(|c| !c.is_finite() || **c <= 0.0) {
        return Err(ScaleError::InvalidCandidates(format!("log candidate {c} must be finite and > 0")));
    }
    if candidates.windows(2).any(|w| w[1] >= w[0]) {
        return Err(ScaleError::InvalidCandidates("log candidates must be strictly descending".into()));
    }
    Ok(())
}
