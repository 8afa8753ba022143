// File: crates/axis-core/src/ticks.rs
// Summary: Enumerate tick values of a solved scale.

use crate::axis::AxisKind;
use crate::label;
use crate::types::ScaleResult;

/// Iterator over the tick values of a [`ScaleResult`], from `adjusted_min` to
/// `adjusted_max` inclusive. Values are computed from the tick index, not by
/// repeated addition, so error does not accumulate along the axis.
///
/// The iterator stops on the index: it yields exactly
/// `interval_count() + 1` values (one for a zero-interval result) and never
/// compares tick values against `adjusted_max`.
#[derive(Clone, Debug)]
pub struct Ticks {
    result: ScaleResult,
    index: usize,
    count: usize,
}

impl Ticks {
    pub fn new(result: ScaleResult) -> Self {
        let intervals = result.interval_count();
        let count = if intervals == 0 { 1 } else { intervals + 1 };
        Self { result, index: 0, count }
    }

    fn value_at(&self, i: usize) -> f64 {
        let r = &self.result;
        // pin both ends so the first and last labels match the solved bounds
        if i == 0 { return r.adjusted_min; }
        if i + 1 == self.count { return r.adjusted_max; }
        match r.kind {
            AxisKind::Linear => r.adjusted_min + r.step * i as f64,
            AxisKind::Logarithmic => r.adjusted_min * r.step.powi(i as i32),
        }
    }
}

impl Iterator for Ticks {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.count { return None; }
        let v = self.value_at(self.index);
        self.index += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Ticks {}

impl ScaleResult {
    pub fn ticks(&self) -> Ticks {
        Ticks::new(*self)
    }

    /// Formatted label for every tick. Log axes format each value against the
    /// gap to its successor, since the spacing grows along the axis.
    pub fn labels(&self) -> Vec<String> {
        match self.kind {
            AxisKind::Linear => self.ticks().map(|v| label::format_tick(v, self.step)).collect(),
            AxisKind::Logarithmic => self
                .ticks()
                .map(|v| label::format_tick(v, v * (self.step - 1.0)))
                .collect(),
        }
    }
}
