// File: crates/axis-core/src/axis.rs
// Summary: Axis model (label, range, kind) dispatching to the matching solver.

use crate::config::ScaleConfig;
use crate::error::Result;
use crate::types::{AxisRange, ScaleResult};
use crate::{linear, logarithmic};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisKind {
    #[default]
    Linear,
    Logarithmic,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: AxisKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: AxisKind::Linear }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { kind: AxisKind::Logarithmic, ..Self::new(label, min, max) }
    }

    pub fn range(&self) -> AxisRange {
        AxisRange::new(self.min, self.max)
    }

    /// Exactly `n` intervals, using the candidate set and tolerance for this
    /// axis kind from `config`.
    pub fn solve(&self, n: usize, config: &ScaleConfig) -> Result<ScaleResult> {
        match self.kind {
            AxisKind::Linear => linear::solve_exact_with_tolerance(
                self.range(),
                n,
                &config.linear_candidates,
                config.linear_tolerance,
            ),
            AxisKind::Logarithmic => logarithmic::solve_log_with_tolerance(
                self.range(),
                n,
                &config.log_candidates,
                config.log_tolerance,
            ),
        }
    }

    /// Roughly `n` intervals with the fixed 1-2-5 multipliers. Linear axes only;
    /// a logarithmic axis falls back to its exact solver.
    pub fn solve_approx(&self, n: usize, config: &ScaleConfig) -> Result<ScaleResult> {
        match self.kind {
            AxisKind::Linear => linear::solve_with_tolerance(self.range(), n, config.linear_tolerance),
            AxisKind::Logarithmic => self.solve(n, config),
        }
    }
}
