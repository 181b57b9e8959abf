//! Command implementations

pub mod benchmark;
mod config;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use config::{DEFAULT_USER, GameConfig};
pub use simple::run_simple;
pub use solve::{SolveConfig, solve_name};
