//! Experiment description generation.
//!
//! A benchmark is named `<type>-<leechers>-<s|l><helpers>[-...]`, for
//! example `credit-12-s2`. From that name this module produces the
//! experiment file consumed by the grid deployment tool, and the runtime
//! budget of each role.

mod benchmark;
mod error;
mod render;

pub use benchmark::{BenchmarkSpec, BenchmarkType, CoordinatorRole, BENCHMARK_TYPES};
pub use error::ExperimentError;
pub use render::{render_experiment, runtime_for_role};
