// File: crates/axis-core/src/config.rs
// Summary: Candidate step sets, round-off tolerances, and the `ScaleConfig` bundle.

use crate::error::Result;
use crate::rounding::validate_tolerance;
use crate::{linear, logarithmic};

/// Round-off margin for linear tick indices. Larger than division round-off,
/// smaller than any increment a plot can show.
pub const LINEAR_ROUNDOFF: f64 = 2e-9;
/// Round-off margin in log10 space, where `log10` adds its own error.
pub const LOG_ROUNDOFF: f64 = 1e-8;

/// Fixed multipliers of the approximate-count linear solver.
pub const APPROX_MULTIPLIERS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];
/// sqrt(2), sqrt(10), sqrt(50): geometric means of adjacent multipliers.
pub const APPROX_BREAKPOINTS: [f64; 3] = [
    std::f64::consts::SQRT_2,
    3.162_277_660_168_379_5,
    7.071_067_811_865_475_5,
];

pub const DEFAULT_LINEAR_CANDIDATES: [f64; 5] = [1.0, 2.0, 5.0, 10.0, 20.0];
pub const DEFAULT_LOG_CANDIDATES: [f64; 11] = [10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.5];

/// Solver settings used by [`crate::Axis`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleConfig {
    pub linear_candidates: Vec<f64>,
    pub log_candidates: Vec<f64>,
    pub linear_tolerance: f64,
    pub log_tolerance: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            linear_candidates: DEFAULT_LINEAR_CANDIDATES.to_vec(),
            log_candidates: DEFAULT_LOG_CANDIDATES.to_vec(),
            linear_tolerance: LINEAR_ROUNDOFF,
            log_tolerance: LOG_ROUNDOFF,
        }
    }
}

impl ScaleConfig {
    pub fn with_linear_candidates(mut self, candidates: impl Into<Vec<f64>>) -> Self {
        self.linear_candidates = candidates.into();
        self
    }

    pub fn with_log_candidates(mut self, candidates: impl Into<Vec<f64>>) -> Self {
        self.log_candidates = candidates.into();
        self
    }

    pub fn with_linear_tolerance(mut self, tolerance: f64) -> Self {
        self.linear_tolerance = tolerance;
        self
    }

    pub fn with_log_tolerance(mut self, tolerance: f64) -> Self {
        self.log_tolerance = tolerance;
        self
    }

    /// Check every field up front instead of at the first solve.
    pub fn validate(&self) -> Result<()> {
        linear::validate_candidates(&self.linear_candidates)?;
        logarithmic::validate_candidates(&self.log_candidates)?;
        validate_tolerance(self.linear_tolerance)?;
        validate_tolerance(self.log_tolerance)
    }
}
