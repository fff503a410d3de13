//! Command implementations

pub mod benchmark;
pub mod enter;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use enter::{read_board, run_enter};
pub use solve::{SolveConfig, SolveReport, solve_board};
