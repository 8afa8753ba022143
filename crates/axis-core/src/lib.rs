// File: crates/axis-core/src/lib.rs
// Summary: Library entry point; exports the axis scale solvers and helpers.
//
// Given a data range and a desired number of intervals, the solvers pick
// round tick boundaries and spacing for a linear or logarithmic axis
// (ACM Algorithm 463, SCALE1/2/3). Everything here is pure: no state, no I/O.
//
// ```
// use axis_core::{linear, AxisRange};
//
// let r = linear::solve(AxisRange::new(0.0, 100.0), 5).unwrap();
// assert_eq!((r.adjusted_min, r.adjusted_max, r.step), (0.0, 100.0, 20.0));
// ```

pub mod axis;
pub mod config;
pub mod density;
pub mod error;
pub mod label;
pub mod linear;
pub mod logarithmic;
pub mod rounding;
pub mod ticks;
pub mod types;

pub use axis::{Axis, AxisKind};
pub use config::ScaleConfig;
pub use error::{Result, ScaleError};
pub use linear::{solve, solve_exact};
pub use logarithmic::solve_log;
pub use rounding::{tolerant_ceil, tolerant_floor};
pub use ticks::Ticks;
pub use types::{AxisRange, ScaleResult};
