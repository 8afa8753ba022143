// File: crates/axis-core/src/linear.rs
// Summary: Linear axis solvers: approximate interval count (SCALE1) and
// exact interval count over caller-supplied candidates (SCALE2).
//
// Both follow ACM Algorithm 463 (C. R. Lewart, CACM 16(10), 1973).

use log::{debug, trace};

use crate::axis::AxisKind;
use crate::config::{APPROX_BREAKPOINTS, APPROX_MULTIPLIERS, LINEAR_ROUNDOFF};
use crate::error::{Result, ScaleError};
use crate::rounding::{center_window, cover, finish, require_intervals, snap_indices, validate_tolerance, Magnitude};
use crate::types::{AxisRange, ScaleResult};

/// Round spacing for roughly `n` intervals over `range`; the actual count may
/// differ slightly in favour of a nicer step.
pub fn solve(range: AxisRange, n: usize) -> Result<ScaleResult> {
    solve_with_tolerance(range, n, LINEAR_ROUNDOFF)
}

pub fn solve_with_tolerance(range: AxisRange, n: usize, tolerance: f64) -> Result<ScaleResult> {
    range.validate()?;
    require_intervals(n, 1)?;
    validate_tolerance(tolerance)?;

    let mag = Magnitude::of(range.span() / n as f64)?;
    // Breakpoints are geometric means of neighbouring multipliers.
    let i = APPROX_BREAKPOINTS
        .iter()
        .position(|&bp| mag.mantissa < bp)
        .unwrap_or(APPROX_BREAKPOINTS.len());
    let step = APPROX_MULTIPLIERS[i] * mag.scale();

    let (m1, m2) = snap_indices(&range, step, tolerance)?;
    let (lo, hi) = cover(step * m1 as f64, step * m2 as f64, &range);
    let result = finish(lo, hi, step, AxisKind::Linear)?;
    debug!("linear approx {range:?} n={n} -> {result:?}");
    Ok(result)
}

/// Round spacing dividing a superset of `range` into exactly `n` intervals.
///
/// `candidates` are ascending multipliers `>= 1` (conventionally
/// `1, 2, 5, 10, 20`), each scaled by a power of ten. The scan starts at the
/// first candidate not below the normalized raw step and moves to coarser
/// ones until the tick span fits in `n` intervals.
pub fn solve_exact(range: AxisRange, n: usize, candidates: &[f64]) -> Result<ScaleResult> {
    solve_exact_with_tolerance(range, n, candidates, LINEAR_ROUNDOFF)
}

pub fn solve_exact_with_tolerance(
    range: AxisRange,
    n: usize,
    candidates: &[f64],
    tolerance: f64,
) -> Result<ScaleResult> {
    range.validate()?;
    require_intervals(n, 2)?;
    validate_candidates(candidates)?;
    validate_tolerance(tolerance)?;

    let mag = Magnitude::of(range.span() / n as f64)?;
    let last = candidates.len() - 1;
    let start = candidates[..last]
        .iter()
        .position(|&c| mag.mantissa < c + tolerance)
        .unwrap_or(last);

    for &multiplier in &candidates[start..] {
        let step = multiplier * mag.scale();
        let (m1, m2) = snap_indices(&range, step, tolerance)?;
        let np = m2 - m1;
        trace!("candidate {multiplier}: step={step} ticks [{m1}, {m2}] -> {np} intervals");
        if np <= n as i64 {
            let (lo, hi) = center_window(m1, np, n, step);
            let (lo, hi) = cover(lo, hi, &range);
            let result = finish(lo, hi, step, AxisKind::Linear)?;
            debug!("linear exact {range:?} n={n} -> {result:?}");
            return Ok(result);
        }
    }
    Err(ScaleError::CandidatesExhausted { n, candidates: candidates.len() })
}

/// Linear candidates must be non-empty, finite, `>= 1` and strictly ascending.
pub fn validate_candidates(candidates: &[f64]) -> Result<()> {
    if candidates.is_empty() {
        return Err(ScaleError::InvalidCandidates("empty candidate list".into()));
    }
    if let Some(c) = candidates.iter().find(|c| !c.is_finite() || **c < 1.0) {
        return Err(ScaleError::InvalidCandidates(format!("linear candidate {c} must be finite and >= 1")));
    }
    if candidates.windows(2).any(|w| w[1] <= w[0]) {
        return Err(ScaleError::InvalidCandidates("linear candidates must be strictly ascending".into()));
    }
    Ok(())
}
