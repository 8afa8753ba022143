// File: crates/axis-core/src/error.rs
// Summary: Error type returned by every solver when its inputs are unusable.

use thiserror::Error;

/// Solver failures. None are recoverable inside the solvers. All but
/// `Unrepresentable` are precondition checks made before any arithmetic;
/// that one is raised as soon as a step or bound leaves the finite `f64` range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("invalid axis range [{min}, {max}]: bounds must be finite with max > min")]
    InvalidRange { min: f64, max: f64 },

    #[error("interval count {n} is too small, at least {min_required} required")]
    InvalidTickCount { n: usize, min_required: usize },

    #[error("logarithmic axis needs a strictly positive minimum, got {min}")]
    NonPositiveLogMinimum { min: f64 },

    #[error("invalid candidate steps: {0}")]
    InvalidCandidates(String),

    #[error("no candidate step yields at most {n} intervals ({candidates} candidates available)")]
    CandidatesExhausted { n: usize, candidates: usize },

    #[error("round-off tolerance must be finite and within [0, 0.5), got {0}")]
    InvalidTolerance(f64),

    #[error("{what} {value} does not fit in f64; the range is too wide or too narrow to scale")]
    Unrepresentable { what: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, ScaleError>;
