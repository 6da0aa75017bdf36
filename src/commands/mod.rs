//! Command implementations

pub mod benchmark;
pub mod solve;

pub use benchmark::{run_benchmark, BenchmarkResult};
pub use solve::{solve_board, BoardReport, FoundWord};
