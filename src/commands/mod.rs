//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod suggest;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_word};
pub use suggest::{SuggestResult, suggest};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
